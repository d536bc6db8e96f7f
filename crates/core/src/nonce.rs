//! Time-windowed HMAC nonces for the plugin submission host.
//!
//! A nonce is bound to an action name and a "tick" (half of the configured
//! lifespan). Verification accepts the current tick and the previous one,
//! so an issued nonce stays valid for between half and a full lifespan.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::types::Timestamp;

/// Action name the brief form submits under.
pub const SUBMIT_ACTION: &str = "findify_submit_brief";

/// Default nonce lifespan: one day.
pub const DEFAULT_LIFESPAN_SECS: i64 = 86_400;

/// Number of MAC bytes kept in the nonce (hex-encoded: 10 characters).
const NONCE_BYTES: usize = 5;

type HmacSha256 = Hmac<Sha256>;

/// Which window a verified nonce belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceAge {
    /// Issued during the current tick.
    Fresh,
    /// Issued during the previous tick; still accepted.
    Aging,
}

/// Issues and verifies nonces with a server-side secret.
#[derive(Clone)]
pub struct NonceIssuer {
    secret: Vec<u8>,
    tick_secs: i64,
}

impl std::fmt::Debug for NonceIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceIssuer")
            .field("tick_secs", &self.tick_secs)
            .finish_non_exhaustive()
    }
}

impl NonceIssuer {
    pub fn new(secret: impl Into<Vec<u8>>, lifespan_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            tick_secs: (lifespan_secs / 2).max(1),
        }
    }

    /// Issue a nonce for `action` at `now`.
    pub fn issue(&self, action: &str, now: Timestamp) -> String {
        let tag = self.mac(self.tick(now), action).finalize().into_bytes();
        hex::encode(&tag[..NONCE_BYTES])
    }

    /// Verify a submitted nonce. Returns `None` when it is malformed, was
    /// issued for another action or secret, or has expired.
    pub fn verify(&self, nonce: &str, action: &str, now: Timestamp) -> Option<NonceAge> {
        let submitted = hex::decode(nonce).filter(|bytes| bytes.len() == NONCE_BYTES)?;
        let tick = self.tick(now);

        [(tick, NonceAge::Fresh), (tick - 1, NonceAge::Aging)]
            .into_iter()
            .find(|(t, _)| {
                self.mac(*t, action)
                    .verify_truncated_left(&submitted)
                    .is_ok()
            })
            .map(|(_, age)| age)
    }

    fn tick(&self, now: Timestamp) -> i64 {
        let secs = now.timestamp();
        (secs + self.tick_secs - 1).div_euclid(self.tick_secs)
    }

    fn mac(&self, tick: i64, action: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(format!("{tick}|{action}").as_bytes());
        mac
    }
}

// ---------------------------------------------------------------------------
// hex helpers
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string (either case). `None` on odd length or a
    /// non-hex character.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        s.as_bytes()
            .chunks(2)
            .map(|pair| {
                let hi = (pair[0] as char).to_digit(16)?;
                let lo = (pair[1] as char).to_digit(16)?;
                Some((hi * 16 + lo) as u8)
            })
            .collect()
    }
}
