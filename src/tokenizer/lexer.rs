//! # Lexer State Machine
//!
//! A single-pass, character-at-a-time state machine that turns raw PRQL
//! source text into an ordered [`Tokens`] sequence. The pipeline operator
//! `|` and the physical newline are synonymous stage separators; both are
//! normalized into a single [`TokenKind::Pipe`] token between content-bearing
//! stages. Normalization never affects a token's reported position, which is
//! always the physical location of its first character.
//!
//! The lexer is total: it never fails on any input. An unterminated string
//! or comment at end of input flushes as a best-effort partial token rather
//! than producing an error, so a downstream parser currently has no distinct
//! signal for the unterminated case.
//!
//! The lexer classifies and slices text only. It performs no validation of
//! keyword vocabulary, expression structure, or bracket balance.

use super::token::{Token, TokenKind, Tokens};

/// Characters that always form a standalone [`TokenKind::Operator`] token,
/// even without surrounding whitespace. The `=` character is not among them:
/// it is an ordinary word character so that operator words like `==` stay
/// whole, and a word consisting of a lone `=` is emitted as an Operator.
const DELIMITERS: [char; 4] = ['[', ']', '(', ')'];

/// Scratch state while scanning a quoted literal.
///
/// A literal that opens with a run of three or more identical quote
/// characters is a block string and requires the full run to close. Shorter
/// runs collapse to simple semantics: a run of exactly two with no inner
/// content is the empty string, which (having an empty value) produces no
/// token at all.
#[derive(Debug, Clone, Copy)]
struct StringScan {
    /// The quote character that opened the literal.
    quote: char,
    /// Length of the opening quote run.
    open_run: usize,
    /// Closing quotes provisionally consumed as a possible block terminator.
    tentative: usize,
    /// Whether the literal requires a full `open_run` of quotes to close.
    block: bool,
    /// Whether any non-quote content has been seen yet.
    has_content: bool,
}

impl StringScan {
    fn new(quote: char) -> Self {
        Self {
            quote,
            open_run: 1,
            tentative: 0,
            block: false,
            has_content: false,
        }
    }
}

/// Lexer mode. Exactly one is active at a time; there is no terminal mode,
/// end of input simply flushes whatever is pending.
#[derive(Debug, Clone, Copy)]
enum Mode {
    Start,
    Keyword,
    Generic,
    Comment,
    String(StringScan),
}

/// One invocation's scan state. No state survives across invocations.
struct Lexer {
    mode: Mode,
    line: u32,
    column: u32,
    /// Start position of the in-flight token.
    token_line: u32,
    token_column: u32,
    /// Kind the in-flight token will flush with.
    kind: TokenKind,
    buffer: String,
    /// Armed whenever stage content is buffered; a Pipe is due at the next
    /// separator.
    pipe_pending: bool,
    /// True at input start and after every stage separator, until stage
    /// content begins. Decides Keyword vs Generic classification.
    at_stage_start: bool,
    /// Kind of the most recently emitted token, carried explicitly so the
    /// pipe-collapse rule is auditable.
    last_kind: Option<TokenKind>,
    tokens: Tokens,
}

impl Lexer {
    fn new() -> Self {
        Self {
            mode: Mode::Start,
            line: 1,
            column: 0,
            token_line: 1,
            token_column: 0,
            kind: TokenKind::Unknown,
            buffer: String::new(),
            pipe_pending: false,
            at_stage_start: true,
            last_kind: None,
            tokens: Tokens::new(),
        }
    }

    /// Advances the state machine by one code point.
    fn step(&mut self, ch: char) {
        self.column += 1;

        match self.mode {
            Mode::Start => self.scan_start(ch),
            Mode::Keyword | Mode::Generic => self.scan_word(ch),
            Mode::Comment => self.scan_comment(ch),
            Mode::String(_) => self.scan_string(ch),
        }

        if ch == '\n' {
            // String content is opaque to stage boundaries; pipeline logic
            // only fires at ordinary newlines.
            if !matches!(self.mode, Mode::String(_)) {
                self.flush_pipe();
                self.at_stage_start = true;
            }
            self.line += 1;
            self.column = 0;
        }
    }

    /// Flushes everything still open at end of input. Unterminated strings
    /// and comments flush leniently as partial tokens.
    fn finish(mut self) -> Tokens {
        self.column += 1;
        self.flush_token();
        self.flush_pipe();
        self.tokens
    }

    fn scan_start(&mut self, ch: char) {
        if ch.is_whitespace() {
            return;
        }

        self.token_line = self.line;
        self.token_column = self.column;

        match ch {
            '|' => {
                self.flush_pipe();
                self.at_stage_start = true;
            }
            '#' => {
                // The stage ended where the comment begins, so any due Pipe
                // goes out ahead of the comment token.
                self.flush_pipe();
                self.mode = Mode::Comment;
                self.kind = TokenKind::Comment;
            }
            '\'' | '"' => {
                self.mode = Mode::String(StringScan::new(ch));
                self.kind = TokenKind::String;
                self.at_stage_start = false;
            }
            ch if DELIMITERS.contains(&ch) => self.push_operator(ch),
            _ => {
                if self.at_stage_start {
                    self.mode = Mode::Keyword;
                    self.kind = TokenKind::Keyword;
                } else {
                    self.mode = Mode::Generic;
                    self.kind = TokenKind::Generic;
                }
                self.at_stage_start = false;
                self.buffer.push(ch);
                self.pipe_pending = true;
            }
        }
    }

    fn scan_word(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.flush_token();
            self.mode = Mode::Start;
        } else if ch == '|' {
            // The pipeline operator separates stages even without
            // surrounding whitespace.
            self.flush_token();
            self.flush_pipe();
            self.at_stage_start = true;
            self.mode = Mode::Start;
        } else if DELIMITERS.contains(&ch) {
            self.flush_token();
            self.push_operator(ch);
            self.mode = Mode::Start;
        } else if (ch == '\'' || ch == '"') && (self.buffer == "f" || self.buffer == "s") {
            // Prefix-string handoff: the buffered word was a string prefix,
            // not a word of its own. The token keeps the prefix's position
            // but its value will exclude both prefix and delimiters.
            self.kind = if self.buffer == "f" {
                TokenKind::FString
            } else {
                TokenKind::SString
            };
            self.buffer.clear();
            self.mode = Mode::String(StringScan::new(ch));
        } else {
            self.buffer.push(ch);
            self.pipe_pending = true;
        }
    }

    fn scan_comment(&mut self, ch: char) {
        if ch == '\n' {
            self.flush_token();
            self.mode = Mode::Start;
        } else if !self.buffer.is_empty() || !ch.is_whitespace() {
            // Whitespace ahead of the first content character is dropped;
            // everything from there on is retained.
            self.buffer.push(ch);
        }
    }

    fn scan_string(&mut self, ch: char) {
        let Mode::String(mut scan) = self.mode else {
            return;
        };

        if ch == scan.quote {
            if !scan.has_content {
                // Still counting the opening quote run.
                scan.open_run += 1;
            } else if scan.block {
                scan.tentative += 1;
                if scan.tentative == scan.open_run {
                    self.flush_token();
                    self.mode = Mode::Start;
                    return;
                }
            } else {
                self.flush_token();
                self.mode = Mode::Start;
                return;
            }
        } else {
            if !scan.has_content {
                scan.has_content = true;
                scan.block = scan.open_run >= 3;
            } else if scan.tentative > 0 {
                // The quotes consumed as a possible terminator turned out to
                // be content; re-materialize them literally.
                for _ in 0..scan.tentative {
                    self.buffer.push(scan.quote);
                }
                scan.tentative = 0;
            }
            self.buffer.push(ch);
        }

        self.mode = Mode::String(scan);
    }

    /// Pushes the in-flight token, if it has any content, and records its
    /// kind for the classification and pipe-collapse rules.
    fn flush_token(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let value = std::mem::take(&mut self.buffer);
        let word = matches!(self.mode, Mode::Keyword | Mode::Generic);
        let kind = if word && value == "=" {
            // A lone `=` word is the assignment operator.
            TokenKind::Operator
        } else {
            self.kind
        };

        self.tokens
            .push(Token::new(kind, value, self.token_line, self.token_column));
        self.last_kind = Some(kind);
        self.kind = TokenKind::Unknown;
    }

    /// Emits a Pipe at the current position when one is due: stage content
    /// was seen since the last separator, and the previous token is not
    /// already a Pipe. Consecutive separators therefore collapse to one.
    fn flush_pipe(&mut self) {
        if self.pipe_pending && self.last_kind != Some(TokenKind::Pipe) {
            self.tokens
                .push(Token::new(TokenKind::Pipe, "|", self.line, self.column));
            self.last_kind = Some(TokenKind::Pipe);
            self.pipe_pending = false;
        }
    }

    fn push_operator(&mut self, ch: char) {
        self.tokens
            .push(Token::new(TokenKind::Operator, ch, self.line, self.column));
        self.last_kind = Some(TokenKind::Operator);
    }
}

/// Tokenizes PRQL source text.
///
/// Performs pipeline normalization: the operator `|` and the newline are
/// synonymous, and runs of separators with no intervening content emit a
/// single Pipe token. Token positions always report the physical source
/// location of the token's first character.
///
/// The function is pure and total: identical input yields identical output,
/// no input fails, and no I/O or logging happens on the way.
///
/// ```
/// use prql::tokenizer::{tokenize, TokenKind};
///
/// let tokens = tokenize("from employees\nfilter age >= 18");
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[0].value, "from");
/// assert_eq!(tokens[2].kind, TokenKind::Pipe);
/// ```
pub fn tokenize(source: &str) -> Tokens {
    let mut lexer = Lexer::new();
    for ch in source.chars() {
        lexer.step(ch);
    }
    lexer.finish()
}
