//! # Account Layout
//!
//! Fixed-size binary layout of every program account. Integers are
//! little-endian; strings are a `u32` length followed by a zero-padded
//! buffer of fixed capacity.
//!
//! ```text
//! Cube     disc 8 | co 8 | cp 8 | eo 12 | ep 12 | prize 8 | sponsor 32 | payer 32 | ordinal 8   = 128
//! Sponsor  disc 8 | owner 32 | name 4+30 | desc 4+70 | challenges_created 8 | total_fund 8      = 164
//! Winner   disc 8 | winner 32 | challenges_won 8 | cashed_prize 8 | name 4+30                   =  90
//! ```
//!
//! The discriminator is the first 8 bytes of `SHA-256("account:<Name>")`.

use super::accounts::{ChallengeAccount, ProgramAccount, SponsorAccount, WinnerAccount};
use cube_01_state_model::{CubeError, CubeState, CORNERS, EDGES};
use shared_types::{Address, ADDRESS_LEN};
use thiserror::Error;

/// Length of the account discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;
/// Byte capacity of a sponsor name.
pub const SPONSOR_NAME_CAPACITY: usize = 30;
/// Byte capacity of a sponsor description.
pub const SPONSOR_DESC_CAPACITY: usize = 70;
/// Byte capacity of a winner name.
pub const WINNER_NAME_CAPACITY: usize = 30;

const STRING_PREFIX_LEN: usize = 4;

/// Encoded size of a challenge account.
pub const CHALLENGE_ACCOUNT_LEN: usize =
    DISCRIMINATOR_LEN + 2 * CORNERS + 2 * EDGES + 8 + 2 * ADDRESS_LEN + 8;
/// Encoded size of a sponsor account.
pub const SPONSOR_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN
    + ADDRESS_LEN
    + STRING_PREFIX_LEN
    + SPONSOR_NAME_CAPACITY
    + STRING_PREFIX_LEN
    + SPONSOR_DESC_CAPACITY
    + 8
    + 8;
/// Encoded size of a winner account.
pub const WINNER_ACCOUNT_LEN: usize =
    DISCRIMINATOR_LEN + ADDRESS_LEN + 8 + 8 + STRING_PREFIX_LEN + WINNER_NAME_CAPACITY;

/// Kind of program account, identified by its discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// `Sponsor`
    Sponsor,
    /// `Cube`
    Challenge,
    /// `Winner`
    Winner,
}

impl AccountKind {
    /// Every kind.
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Sponsor,
        AccountKind::Challenge,
        AccountKind::Winner,
    ];

    /// Account type name hashed into the discriminator.
    pub const fn type_name(self) -> &'static str {
        match self {
            AccountKind::Sponsor => "Sponsor",
            AccountKind::Challenge => "Cube",
            AccountKind::Winner => "Winner",
        }
    }

    /// `SHA-256("account:<Name>")[..8]`.
    pub const fn discriminator(self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            AccountKind::Sponsor => [0x13, 0x80, 0x73, 0x6d, 0x76, 0x6d, 0x42, 0xd5],
            AccountKind::Challenge => [0x54, 0x83, 0xa1, 0x2c, 0x83, 0x8c, 0x55, 0xf4],
            AccountKind::Winner => [0x7e, 0x4a, 0xc8, 0xba, 0xe4, 0x01, 0x24, 0x17],
        }
    }

    /// Encoded size including the discriminator.
    pub const fn size(self) -> usize {
        match self {
            AccountKind::Sponsor => SPONSOR_ACCOUNT_LEN,
            AccountKind::Challenge => CHALLENGE_ACCOUNT_LEN,
            AccountKind::Winner => WINNER_ACCOUNT_LEN,
        }
    }

    /// Kind for a discriminator, if known.
    pub fn from_discriminator(disc: &[u8]) -> Option<AccountKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminator().as_slice() == disc)
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Encoding or decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Data does not begin with a known discriminator.
    #[error("unknown account discriminator")]
    UnknownDiscriminator,

    /// Data length does not match the kind's fixed size.
    #[error("{kind} account must be {expected} bytes, got {got}")]
    WrongSize {
        /// Decoded kind.
        kind: AccountKind,
        /// Fixed size of that kind.
        expected: usize,
        /// Actual data length.
        got: usize,
    },

    /// Account is a different kind than the caller asked for.
    #[error("expected {expected} account, found {found}")]
    WrongKind {
        /// Kind asked for.
        expected: AccountKind,
        /// Kind stored.
        found: AccountKind,
    },

    /// A string does not fit its fixed buffer.
    #[error("{field} is {len} bytes, capacity is {capacity}")]
    StringTooLong {
        /// Field name.
        field: &'static str,
        /// String length in bytes.
        len: usize,
        /// Buffer capacity.
        capacity: usize,
    },

    /// A stored string is not UTF-8.
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 {
        /// Field name.
        field: &'static str,
    },

    /// Stored cube arrays violate the cube invariants.
    #[error("stored cube is invalid: {0}")]
    InvalidCube(#[from] CubeError),
}

// =============================================================================
// ENCODING
// =============================================================================

struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    fn new(kind: AccountKind) -> Self {
        let mut buf = Vec::with_capacity(kind.size());
        buf.extend_from_slice(&kind.discriminator());
        Self { buf }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn string(
        &mut self,
        field: &'static str,
        value: &str,
        capacity: usize,
    ) -> Result<(), LayoutError> {
        let len = value.len();
        let prefix = u32::try_from(len)
            .ok()
            .filter(|_| len <= capacity)
            .ok_or(LayoutError::StringTooLong {
                field,
                len,
                capacity,
            })?;
        self.buf.extend_from_slice(&prefix.to_le_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.resize(self.buf.len() + capacity - len, 0);
        Ok(())
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Encode any program account.
pub fn encode_account(account: &ProgramAccount) -> Result<Vec<u8>, LayoutError> {
    match account {
        ProgramAccount::Sponsor(s) => encode_sponsor(s),
        ProgramAccount::Challenge(c) => Ok(encode_challenge(c)),
        ProgramAccount::Winner(w) => encode_winner(w),
    }
}

/// Encode a sponsor account.
pub fn encode_sponsor(account: &SponsorAccount) -> Result<Vec<u8>, LayoutError> {
    let mut w = Writer::new(AccountKind::Sponsor);
    w.bytes(account.owner.as_bytes());
    w.string("sponsor name", &account.name, SPONSOR_NAME_CAPACITY)?;
    w.string("sponsor description", &account.description, SPONSOR_DESC_CAPACITY)?;
    w.u64(account.challenges_created);
    w.u64(account.total_fund);
    Ok(w.finish())
}

/// Encode a challenge account. Infallible: every field is fixed-size.
pub fn encode_challenge(account: &ChallengeAccount) -> Vec<u8> {
    let mut w = Writer::new(AccountKind::Challenge);
    w.bytes(&account.cube.co());
    w.bytes(&account.cube.cp());
    w.bytes(&account.cube.eo());
    w.bytes(&account.cube.ep());
    w.u64(account.prize);
    w.bytes(account.sponsor.as_bytes());
    w.bytes(account.payer.as_bytes());
    w.u64(account.ordinal);
    w.finish()
}

/// Encode a winner account.
pub fn encode_winner(account: &WinnerAccount) -> Result<Vec<u8>, LayoutError> {
    let mut w = Writer::new(AccountKind::Winner);
    w.bytes(account.winner.as_bytes());
    w.u64(account.challenges_won);
    w.u64(account.cashed_prize);
    w.string("winner name", &account.name, WINNER_NAME_CAPACITY)?;
    Ok(w.finish())
}

// =============================================================================
// DECODING
// =============================================================================

/// Cursor over data whose length has already been checked.
struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: DISCRIMINATOR_LEN,
        }
    }

    fn array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    fn u64(&mut self) -> u64 {
        u64::from_le_bytes(self.array())
    }

    fn address(&mut self) -> Address {
        Address::new(self.array())
    }

    fn string(&mut self, field: &'static str, capacity: usize) -> Result<String, LayoutError> {
        let len = u32::from_le_bytes(self.array()) as usize;
        let buffer = &self.data[self.offset..self.offset + capacity];
        self.offset += capacity;
        if len > capacity {
            return Err(LayoutError::StringTooLong {
                field,
                len,
                capacity,
            });
        }
        std::str::from_utf8(&buffer[..len])
            .map(str::to_string)
            .map_err(|_| LayoutError::InvalidUtf8 { field })
    }
}

/// Identify the kind of raw account data and check its size.
pub fn account_kind(data: &[u8]) -> Result<AccountKind, LayoutError> {
    let kind = data
        .get(..DISCRIMINATOR_LEN)
        .and_then(AccountKind::from_discriminator)
        .ok_or(LayoutError::UnknownDiscriminator)?;
    if data.len() != kind.size() {
        return Err(LayoutError::WrongSize {
            kind,
            expected: kind.size(),
            got: data.len(),
        });
    }
    Ok(kind)
}

/// Decode any program account.
pub fn decode_account(data: &[u8]) -> Result<ProgramAccount, LayoutError> {
    let kind = account_kind(data)?;
    let mut r = Reader::new(data);
    let account = match kind {
        AccountKind::Sponsor => ProgramAccount::Sponsor(SponsorAccount {
            owner: r.address(),
            name: r.string("sponsor name", SPONSOR_NAME_CAPACITY)?,
            description: r.string("sponsor description", SPONSOR_DESC_CAPACITY)?,
            challenges_created: r.u64(),
            total_fund: r.u64(),
        }),
        AccountKind::Challenge => {
            let cube = CubeState::new(r.array(), r.array(), r.array(), r.array())?;
            ProgramAccount::Challenge(ChallengeAccount {
                cube,
                prize: r.u64(),
                sponsor: r.address(),
                payer: r.address(),
                ordinal: r.u64(),
            })
        }
        AccountKind::Winner => ProgramAccount::Winner(WinnerAccount {
            winner: r.address(),
            challenges_won: r.u64(),
            cashed_prize: r.u64(),
            name: r.string("winner name", WINNER_NAME_CAPACITY)?,
        }),
    };
    Ok(account)
}

fn expect_kind(data: &[u8], expected: AccountKind) -> Result<(), LayoutError> {
    let found = account_kind(data)?;
    if found != expected {
        return Err(LayoutError::WrongKind { expected, found });
    }
    Ok(())
}

/// Decode data that must hold a sponsor account.
pub fn decode_sponsor(data: &[u8]) -> Result<SponsorAccount, LayoutError> {
    expect_kind(data, AccountKind::Sponsor)?;
    decode_account(data)?
        .into_sponsor()
        .ok_or(LayoutError::UnknownDiscriminator)
}

/// Decode data that must hold a challenge account.
pub fn decode_challenge(data: &[u8]) -> Result<ChallengeAccount, LayoutError> {
    expect_kind(data, AccountKind::Challenge)?;
    decode_account(data)?
        .into_challenge()
        .ok_or(LayoutError::UnknownDiscriminator)
}

/// Decode data that must hold a winner account.
pub fn decode_winner(data: &[u8]) -> Result<WinnerAccount, LayoutError> {
    expect_kind(data, AccountKind::Winner)?;
    decode_account(data)?
        .into_winner()
        .ok_or(LayoutError::UnknownDiscriminator)
}
