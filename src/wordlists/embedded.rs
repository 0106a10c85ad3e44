//! Embedded demo vocabulary
//!
//! A small mixed-length word list compiled into the binary so the CLI
//! works without any data files. Real games load their dictionary with
//! [`loader::load_from_file`](super::loader::load_from_file).

/// Number of embedded words
pub const WORD_COUNT: usize = 73;

/// Demo vocabulary: lowercase words of three to seven letters
pub const WORDS: &[&str] = &[
    "cat", "car", "bar", "bat", "rat", "ram", "rag", "tag", "tan", "ten",
    "pen", "pin", "pit", "sit", "sat", "mat", "map", "cap", "cup", "cut",
    "care", "cart", "card", "cord", "corn", "born", "barn", "bard", "bird",
    "bind", "band", "bend", "lend", "land", "sand", "send", "mind", "mine",
    "dine", "dime", "time", "tile", "tale", "pale", "pile", "mile", "mole",
    "apple", "apply", "ample", "angle", "ankle", "amble", "table", "cable",
    "fable", "gable", "ladle", "eagle", "maple", "crane", "crate", "grate",
    "irate", "slate", "plate", "plane", "planet", "planks", "plaster",
    "platter", "scatter", "shatter",
];
