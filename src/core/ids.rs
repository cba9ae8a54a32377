//! Identifier types and the allocator that issues them.
//!
//! User ids come from a monotonic counter so they read well in logs and
//! tests, and have exactly one textual spelling. Post ids are short random
//! base-36 tokens; a token the caller reports as taken is drawn again.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

const POST_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const POST_ID_LENGTH: usize = 9;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct UserId(u64);

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical user id: {0:?}")]
pub struct InvalidUserId(String);

impl FromStr for UserId {
    type Err = InvalidUserId;

    /// Accepts only the form `Display` produces: no sign, padding or
    /// leading zeros, so every user has exactly one wire spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidUserId(s.to_string());
        match s.as_bytes() {
            [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => {
                s.parse::<u64>().map(UserId).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type TokenSource = Box<dyn FnMut() -> String + Send + Sync>;

pub struct IdAllocator {
    next_user: u64,
    token: TokenSource,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::with_token_source(Box::new(random_token))
    }

    /// Allocator drawing post tokens from `token` instead of the thread RNG.
    pub fn with_token_source(token: TokenSource) -> Self {
        Self {
            next_user: 1,
            token,
        }
    }

    pub fn next_user_id(&mut self) -> UserId {
        let id = UserId(self.next_user);
        self.next_user += 1;
        id
    }

    /// Draws tokens until one is not `taken`. Posts are never deleted, so the
    /// store's own post index is the record of every id ever issued.
    pub fn next_post_id(&mut self, taken: impl Fn(&PostId) -> bool) -> PostId {
        loop {
            let candidate = PostId((self.token)());
            if !taken(&candidate) {
                return candidate;
            }
            tracing::debug!(token = %candidate, "post id collision, drawing again");
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..POST_ID_LENGTH)
        .map(|_| POST_ID_ALPHABET[rng.gen_range(0..POST_ID_ALPHABET.len())] as char)
        .collect()
}
