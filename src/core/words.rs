/// Verbs on the wheel, in segment order.
pub const WHEEL_WORDS: [&str; 50] = [
    "fly", "find", "feel", "fall", "eat", "drive", "drink", "do", "choose", "come",
    "buy", "bring", "begin", "become", "be", "write", "wear", "understand", "think",
    "tell", "teach", "take", "swim", "stand", "speak", "sleep", "sit", "sing",
    "send", "sell", "see", "say", "run", "read", "put", "pay", "meet", "make",
    "lose", "let", "lend", "leave", "know", "keep", "hear", "have", "go", "give",
    "get", "forget",
];

/// Past-simple answers. Alternatives are separated by `/`.
pub const PAST_SIMPLE: [(&str, &str); 50] = [
    ("fly", "flew"), ("find", "found"), ("feel", "felt"), ("fall", "fell"),
    ("eat", "ate"), ("drive", "drove"), ("drink", "drank"), ("do", "did"),
    ("choose", "chose"), ("come", "came"), ("buy", "bought"), ("bring", "brought"),
    ("begin", "began"), ("become", "became"), ("be", "was/were"), ("write", "wrote"),
    ("wear", "wore"), ("understand", "understood"), ("think", "thought"),
    ("tell", "told"), ("teach", "taught"), ("take", "took"), ("swim", "swam"),
    ("stand", "stood"), ("speak", "spoke"), ("sleep", "slept"), ("sit", "sat"),
    ("sing", "sang"), ("send", "sent"), ("sell", "sold"), ("see", "saw"),
    ("say", "said"), ("run", "ran"), ("read", "read"), ("put", "put"),
    ("pay", "paid"), ("meet", "met"), ("make", "made"), ("lose", "lost"),
    ("let", "let"), ("lend", "lent"), ("leave", "left"), ("know", "knew"),
    ("keep", "kept"), ("hear", "heard"), ("have", "had"), ("go", "went"),
    ("give", "gave"), ("get", "got"), ("forget", "forgot"),
];

pub fn past_simple(verb: &str) -> Option<&'static str> {
    PAST_SIMPLE
        .iter()
        .find(|(v, _)| *v == verb)
        .map(|(_, past)| *past)
}

/// `Some(true)` if `input` is an accepted past-simple form of `verb`.
/// `None` when the verb has no known answer.
pub fn check_answer(verb: &str, input: &str) -> Option<bool> {
    let answer = past_simple(verb)?;
    let given = input.trim().to_lowercase();
    Some(answer.split('/').any(|form| form == given))
}

pub fn feedback_message(verb: &str, correct: bool) -> String {
    let answer = past_simple(verb).unwrap_or("?");
    let lead = if correct { "Correct!" } else { "Not quite." };
    format!(
        "{} \"{}\" in past simple is \"{}\"",
        lead,
        verb.to_uppercase(),
        answer
    )
}

/// Words still in play. Shrinks as words are learned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<&'static str>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPool {
    pub fn new() -> Self {
        Self::from_words(&WHEEL_WORDS)
    }

    pub fn from_words(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    #[inline]
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Remove `word`; returns whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| *w != word);
        self.words.len() != before
    }
}

/// The open quiz, if any: the verb asked and, once checked, the verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quiz {
    verb: Option<&'static str>,
    verdict: Option<bool>,
}

impl Quiz {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.verb.is_some()
    }

    #[inline]
    pub fn verb(&self) -> Option<&'static str> {
        self.verb
    }

    #[inline]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    pub fn open(&mut self, verb: &'static str) {
        self.verb = Some(verb);
        self.verdict = None;
    }

    /// Check `input` once. `None` when closed, already answered, or the verb is unknown.
    pub fn submit(&mut self, input: &str) -> Option<bool> {
        if self.verdict.is_some() {
            return None;
        }
        let correct = check_answer(self.verb?, input)?;
        self.verdict = Some(correct);
        Some(correct)
    }

    /// A word may only be retired after it was answered correctly.
    #[inline]
    pub fn can_remove(&self) -> bool {
        self.verdict == Some(true)
    }

    /// Close the quiz, returning the verb that was asked.
    pub fn close(&mut self) -> Option<&'static str> {
        self.verdict = None;
        self.verb.take()
    }
}
