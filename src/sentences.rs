use rand::Rng;

/// Fixed pool of pangram-style sample sentences. Reproduced verbatim; golden
/// output depends on the exact text.
pub const SAMPLE_SENTENCES: [&str; 15] = [
    "The quick brown fox jumps over the lazy dog.",
    "Pack my box with five dozen liquor jugs.",
    "How vexingly quick daft zebras jump!",
    "Sphinx of black quartz, judge my vow.",
    "Jackdaws love my big sphinx of quartz.",
    "The five boxing wizards jump quickly.",
    "Bright vixens jump; dozy fowl quack.",
    "A mad boxer shot a quick, gloved jab to the jaw of his dizzy opponent.",
    "Two driven jocks help fax my big quiz.",
    "Crazy Fredrick bought many very exquisite opal jewels.",
    "We promptly judged antique ivory buckles for the next prize.",
    "Sixty zippers were quickly picked from the woven jute bag.",
    "Amazingly few discotheques provide jukeboxes.",
    "Jaded zombies acted quaintly but kept driving their oxen forward.",
    "The job requires extra pluck and zeal from every young wage earner.",
];

/// Seed used when the caller does not ask for entropy. With this seed every
/// run selects the same sentence, a reproducibility property worth keeping
/// for golden-output testing.
pub const DEFAULT_SEED: u32 = 123_456_789;

/// Reduces `value` modulo `modulus`.
pub fn mod_value(value: u32, modulus: u32) -> u32 {
    value % modulus
}

/// Xorshift-style sentence selector with explicitly owned state.
#[derive(Debug, Clone)]
pub struct SentencePicker {
    state: u32,
}

impl SentencePicker {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds the selector from OS entropy, the opt-out from reproducibility.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Advances the generator and returns the new state. The shifts wrap
    /// in 32 bits; the sequence depends on that.
    pub fn next_raw(&mut self) -> u32 {
        self.state ^= (self.state << 3) ^ (self.state >> 5) ^ (self.state << 7);
        self.state
    }

    /// Draws one pool index, always in [0, 15).
    pub fn pick_index(&mut self) -> usize {
        mod_value(self.next_raw(), SAMPLE_SENTENCES.len() as u32) as usize
    }

    /// Draws one sentence from the pool.
    pub fn pick(&mut self) -> &'static str {
        SAMPLE_SENTENCES[self.pick_index()]
    }
}

impl Default for SentencePicker {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
