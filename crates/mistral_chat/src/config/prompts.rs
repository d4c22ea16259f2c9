//! Fixed prompts and console text

/// System instruction sent ahead of every question
pub const SYSTEM_PROMPT: &str = "Du er en hjelpsom jaktassistent. Svar alltid på norsk.";

/// Question asked when none is supplied
pub const DEFAULT_QUESTION: &str = "Hva er det beste postvalget ved NØ-vind?";

/// Line printed before the model's answer
pub const BANNER: &str = "--- Svar fra Mistral ---";
