use logos::Logos;

/// Classifies one decomposed slice of a raw input line.
///
/// The variants mirror the fixed, ordered category list used during
/// decomposition. Matching is total: any character no other category claims
/// becomes a single-character [`SubstringKind::Other`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SubstringKind {
    /// A single space character. Runs of spaces decompose one character at a
    /// time; they are never coalesced.
    #[token(" ")]
    Space,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `^`
    #[token("^")]
    Exponent,
    /// A maximal run of decimal digits, such as `42`. Fusing a negation sign
    /// onto a digit run also produces this kind.
    #[regex(r"[0-9]+")]
    Digits,
    /// `d`, the print-stack command character.
    #[token("d")]
    LetterD,
    /// `=`, the print-top command character.
    #[token("=")]
    Equals,
    /// `#`, a potential comment marker.
    #[token("#")]
    Hashtag,
    /// `r`, the push-random command character.
    #[token("r")]
    Random,
    /// Any other single character, tabs included.
    #[regex(".", priority = 1)]
    Other,
}

/// One classified slice of an input line.
///
/// Substrings are immutable once produced; negative-sign fusion replaces a
/// `-`/digit pair with a single new substring rather than editing either in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substring {
    text: String,
    kind: SubstringKind,
}

impl Substring {
    /// Creates a classified substring from its text and kind.
    #[must_use]
    pub const fn new(text: String, kind: SubstringKind) -> Self {
        Self { text, kind }
    }

    /// The slice of input text this substring covers.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The category assigned during decomposition or fusion.
    #[must_use]
    pub const fn kind(&self) -> SubstringKind {
        self.kind
    }
}

/// Decomposes a raw input line into classified substrings.
///
/// Matching is greedy over the ordered category list, so a digit run is
/// consumed whole while everything else is taken one character at a time.
/// Every character of the line lands in exactly one substring.
///
/// # Parameters
/// - `line`: One line of user input, without its trailing newline.
///
/// # Returns
/// The classified substrings in input order.
///
/// # Example
/// ```
/// use srpn::interpreter::lexer::{decompose, SubstringKind};
///
/// let substrings = decompose("12+");
/// assert_eq!(substrings.len(), 2);
/// assert_eq!(substrings[0].text(), "12");
/// assert_eq!(substrings[0].kind(), SubstringKind::Digits);
/// assert_eq!(substrings[1].kind(), SubstringKind::Plus);
/// ```
#[must_use]
pub fn decompose(line: &str) -> Vec<Substring> {
    let mut lexer = SubstringKind::lexer(line);
    let mut substrings = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(SubstringKind::Other);
        substrings.push(Substring::new(lexer.slice().to_owned(), kind));
    }

    substrings
}

/// Joins negation signs onto the digit runs they negate.
///
/// A `-` directly in front of a digit run denotes negation only when the run
/// of consecutive `-` substrings ending at it terminates at the start of the
/// sequence or at a non-digit substring with odd length, or terminates at a
/// digit run with even length. Every other `-` stays a subtraction operator.
/// Fusions apply right to left, since each one shortens the sequence.
///
/// # Parameters
/// - `substrings`: The decomposed line, comments already stripped.
///
/// # Returns
/// A new sequence in which each negation sign and its digit run have become
/// one [`SubstringKind::Digits`] substring.
///
/// # Example
/// ```
/// use srpn::interpreter::lexer::{decompose, fuse_negative_signs, SubstringKind};
///
/// let fused = fuse_negative_signs(decompose("-3"));
/// assert_eq!(fused.len(), 1);
/// assert_eq!(fused[0].text(), "-3");
/// assert_eq!(fused[0].kind(), SubstringKind::Digits);
/// ```
#[must_use]
pub fn fuse_negative_signs(substrings: Vec<Substring>) -> Vec<Substring> {
    let negation_indexes: Vec<usize> =
        (0..substrings.len()).filter(|&index| {
                                 substrings[index].kind() == SubstringKind::Minus
                                 && minus_denotes_negation(&substrings, index)
                             })
                             .collect();

    let mut substrings = substrings;
    for &index in negation_indexes.iter().rev() {
        let minus = substrings.remove(index);
        let digits = substrings.remove(index);
        let text = format!("{}{}", minus.text(), digits.text());
        substrings.insert(index, Substring::new(text, SubstringKind::Digits));
    }

    substrings
}

/// Decides whether the `-` at `index` negates the digit run that follows it.
///
/// Walks backward through the run of consecutive `-` substrings. A run that
/// ends at a digit run looks like subtraction, so an odd continuation flips
/// it back; a run that ends anywhere else starts from negation.
fn minus_denotes_negation(substrings: &[Substring], index: usize) -> bool {
    let followed_by_digits = substrings.get(index + 1)
                                       .is_some_and(|s| s.kind() == SubstringKind::Digits);
    if !followed_by_digits {
        return false;
    }

    let mut run_length = 0_usize;
    let mut cursor = Some(index);
    while let Some(current) = cursor {
        if substrings[current].kind() != SubstringKind::Minus {
            break;
        }
        run_length += 1;
        cursor = current.checked_sub(1);
    }

    let odd_run = run_length % 2 == 1;
    match cursor {
        Some(terminal) if substrings[terminal].kind() == SubstringKind::Digits => !odd_run,
        _ => odd_run,
    }
}

/// Prepares raw user input for tokenization.
///
/// Holds the one piece of lexical state that persists across input lines: a
/// `#` marker left unmatched on one line keeps suppressing input at the start
/// of the next.
#[derive(Debug, Default)]
pub struct Lexer {
    comment_open: bool,
}

impl Lexer {
    /// Creates a lexer with no open comment.
    #[must_use]
    pub const fn new() -> Self {
        Self { comment_open: false }
    }

    /// Decomposes one input line and cleans it for tokenization.
    ///
    /// Comment stripping runs before negative-sign fusion, so a `-` inside a
    /// comment can never fuse with a digit run outside of it.
    ///
    /// # Parameters
    /// - `line`: One line of user input, without its trailing newline.
    ///
    /// # Returns
    /// The substrings that survive comment stripping, with negation signs
    /// fused onto their operands.
    ///
    /// # Example
    /// ```
    /// use srpn::interpreter::lexer::{Lexer, SubstringKind};
    ///
    /// let mut lexer = Lexer::new();
    /// let substrings = lexer.lex("1 # two # 3");
    /// let digits: Vec<&str> = substrings.iter()
    ///                                   .filter(|s| s.kind() == SubstringKind::Digits)
    ///                                   .map(|s| s.text())
    ///                                   .collect();
    /// assert_eq!(digits, ["1", "3"]);
    /// ```
    pub fn lex(&mut self, line: &str) -> Vec<Substring> {
        let substrings = decompose(line);
        let substrings = self.strip_comments(substrings);
        fuse_negative_signs(substrings)
    }

    /// Removes every substring that falls inside a comment.
    ///
    /// Comment markers partition the line; partitions alternate between
    /// outside and inside a comment, and the carried `comment_open` flag
    /// decides which side the first partition is on. Keeping every second
    /// partition starting at `comment_open` drops exactly the inside ones.
    /// The flag flips when a line holds an odd number of markers, which is
    /// how an unmatched trailing `#` suppresses the start of the next line.
    fn strip_comments(&mut self, substrings: Vec<Substring>) -> Vec<Substring> {
        let marker_indexes: Vec<usize> =
            (0..substrings.len()).filter(|&index| {
                                     substrings[index].kind() == SubstringKind::Hashtag
                                     && is_comment_marker(&substrings, index)
                                 })
                                 .collect();

        let mut partitions: Vec<Vec<Substring>> = vec![Vec::new()];
        for (index, substring) in substrings.into_iter().enumerate() {
            if marker_indexes.contains(&index) {
                partitions.push(Vec::new());
            } else {
                let last = partitions.len() - 1;
                partitions[last].push(substring);
            }
        }

        let kept = partitions.into_iter()
                             .skip(usize::from(self.comment_open))
                             .step_by(2)
                             .flatten()
                             .collect();

        if marker_indexes.len() % 2 == 1 {
            self.comment_open = !self.comment_open;
        }

        kept
    }
}

/// Checks whether the `#` at `index` counts as a comment marker.
///
/// A marker must be flanked by a space character or a line boundary on both
/// sides; a `#` glued to anything else degrades to an ordinary substring and
/// later to a zero operand.
fn is_comment_marker(substrings: &[Substring], index: usize) -> bool {
    let valid_preceding = index == 0
                          || substrings[index - 1].kind() == SubstringKind::Space;
    let valid_subsequent = index == substrings.len() - 1
                           || substrings[index + 1].kind() == SubstringKind::Space;

    valid_preceding && valid_subsequent
}
