//! # Escrow Service
//!
//! Orchestrates the challenge lifecycle over the `Ledger` and
//! `AddressDeriver` ports.
//!
//! ## State Machine (per challenge address)
//!
//! ```text
//!            init_challenge                 try_solution (solved)
//!  Absent ─────────────────► Funded ────────────────────────────► Closed
//!                              │  ▲
//!                              └──┘ try_solution (unsolved): UnsolvedCube
//! ```
//!
//! Every entry point validates its inputs, reads the accounts it needs,
//! builds one [`LedgerBatch`] against that snapshot and commits it. The
//! ledger's version check turns a lost race into a ledger error; the
//! service never retries and holds no lock across a transition.

use crate::domain::{
    decode_challenge, decode_sponsor, decode_winner, encode_challenge, encode_sponsor,
    encode_winner, validate_init, validate_winner_name, AccountKind, ChallengeAccount,
    ConfigError, EscrowConfig, EscrowError, LayoutError, SponsorAccount, WinnerAccount,
};
use crate::ports::inbound::{
    EscrowApi, InitChallengeReceipt, InitChallengeRequest, ScrambledInitRequest, SolveReceipt,
    TrySolutionRequest,
};
use crate::ports::outbound::{Ledger, LedgerBatch};
use cube_01_state_model::{CubeState, RawCube};
use cube_02_move_notation::parse_moves_bounded;
use cube_03_address_derivation::{
    derive_challenge_address, derive_sponsor_address, derive_winner_address, AddressDeriver,
};
use parking_lot::Mutex;
use shared_types::{Address, Lamports};
use tracing::{debug, info, instrument, warn};

/// Counters for the escrow service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Challenges committed.
    pub challenges_created: u64,
    /// Solves committed.
    pub challenges_solved: u64,
    /// Solutions rejected as `UnsolvedCube`.
    pub failed_attempts: u64,
    /// Requests rejected for any other reason.
    pub rejected_requests: u64,
    /// Peeks served.
    pub peeks: u64,
    /// Prizes locked by committed inits.
    pub prize_locked: Lamports,
    /// Prizes paid by committed solves.
    pub prize_paid: Lamports,
}

/// The escrow state machine.
pub struct EscrowService<L: Ledger, D: AddressDeriver> {
    /// Request limits.
    config: EscrowConfig,
    /// Host ledger.
    ledger: L,
    /// Host derivation primitive.
    deriver: D,
    /// Service statistics.
    stats: Mutex<ServiceStats>,
}

fn encoded(
    address: Address,
    result: Result<Vec<u8>, LayoutError>,
) -> Result<Vec<u8>, EscrowError> {
    result.map_err(|source| EscrowError::CorruptAccount { address, source })
}

impl<L: Ledger, D: AddressDeriver> EscrowService<L, D> {
    /// Create a service; fails if `config` does not fit the account layout.
    pub fn new(ledger: L, deriver: D, config: EscrowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ledger,
            deriver,
            stats: Mutex::new(ServiceStats::default()),
        })
    }

    /// Request limits in force.
    pub fn config(&self) -> &EscrowConfig {
        &self.config
    }

    /// The ledger port.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The derivation port.
    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    /// Snapshot of the service counters.
    pub fn stats(&self) -> ServiceStats {
        self.stats.lock().clone()
    }

    // =========================================================================
    // ACCOUNT LOADING
    // =========================================================================

    fn load<T>(
        &self,
        address: &Address,
        decode: fn(&[u8]) -> Result<T, LayoutError>,
    ) -> Result<Option<(T, u64)>, EscrowError> {
        // A wallet holding only lamports is not a program account.
        let Some(account) = self
            .ledger
            .get_account(address)?
            .filter(|account| !account.data.is_empty())
        else {
            return Ok(None);
        };
        let value = decode(&account.data).map_err(|source| EscrowError::CorruptAccount {
            address: *address,
            source,
        })?;
        Ok(Some((value, account.version)))
    }

    fn load_existing<T>(
        &self,
        address: &Address,
        decode: fn(&[u8]) -> Result<T, LayoutError>,
    ) -> Result<(T, u64), EscrowError> {
        self.load(address, decode)?
            .ok_or(EscrowError::AccountNotFound(*address))
    }

    fn list<T>(
        &self,
        kind: AccountKind,
        decode: fn(&[u8]) -> Result<T, LayoutError>,
    ) -> Result<Vec<(Address, T)>, EscrowError> {
        self.ledger
            .accounts_with_prefix(&kind.discriminator())?
            .into_iter()
            .map(|(address, account)| {
                decode(&account.data)
                    .map(|value| (address, value))
                    .map_err(|source| EscrowError::CorruptAccount { address, source })
            })
            .collect()
    }

    fn next_ordinal(&self, sponsor_data: &Address) -> Result<u64, EscrowError> {
        Ok(self
            .load(sponsor_data, decode_sponsor)?
            .map_or(0, |(sponsor, _)| sponsor.challenges_created))
    }

    fn reject(&self, err: &EscrowError) {
        let mut stats = self.stats.lock();
        if matches!(err, EscrowError::UnsolvedCube) {
            stats.failed_attempts += 1;
        } else {
            stats.rejected_requests += 1;
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    fn build_init(
        &self,
        request: &InitChallengeRequest,
    ) -> Result<(LedgerBatch, Address, u64), EscrowError> {
        let cube = validate_init(
            &self.config,
            &request.name,
            &request.description,
            request.prize,
            request.cube,
        )?;

        let sponsor_data = derive_sponsor_address(&self.deriver, &request.sponsor, &request.name)?;
        let existing = self.load(&sponsor_data, decode_sponsor)?;
        let ordinal = existing
            .as_ref()
            .map_or(0, |(sponsor, _)| sponsor.challenges_created);

        let expected = derive_challenge_address(&self.deriver, &sponsor_data, ordinal)?;
        if expected != request.challenge_address {
            return Err(EscrowError::OrdinalMismatch {
                expected,
                got: request.challenge_address,
            });
        }

        let batch = match existing {
            Some((mut sponsor, version)) => {
                sponsor.record_challenge(request.prize);
                let data = encoded(sponsor_data, encode_sponsor(&sponsor))?;
                LedgerBatch::new().write(sponsor_data, version, data)
            }
            None => {
                let mut sponsor =
                    SponsorAccount::new(request.sponsor, &request.name, &request.description);
                sponsor.record_challenge(request.prize);
                let data = encoded(sponsor_data, encode_sponsor(&sponsor))?;
                LedgerBatch::new().create(sponsor_data, request.sponsor, data)
            }
        };

        let challenge = ChallengeAccount {
            cube,
            prize: request.prize,
            sponsor: sponsor_data,
            payer: request.sponsor,
            ordinal,
        };
        let batch = batch
            .create(expected, request.sponsor, encode_challenge(&challenge))
            .transfer(request.sponsor, expected, request.prize);

        Ok((batch, sponsor_data, ordinal))
    }

    fn build_solve(
        &self,
        request: &TrySolutionRequest,
    ) -> Result<(LedgerBatch, Address, Lamports, usize), EscrowError> {
        let (challenge, version) = self.load_existing(&request.challenge, decode_challenge)?;
        validate_winner_name(&self.config, &request.winner_name)?;
        let moves = parse_moves_bounded(&request.moves, self.config.max_solution_moves)?;
        if !challenge.cube.apply_all(&moves).is_solved() {
            return Err(EscrowError::UnsolvedCube);
        }

        let winner_data =
            derive_winner_address(&self.deriver, &request.solver, &request.winner_name)?;
        let batch = LedgerBatch::new().transfer(request.challenge, request.solver, challenge.prize);
        let batch = match self.load(&winner_data, decode_winner)? {
            Some((mut winner, winner_version)) => {
                winner.record_win(challenge.prize);
                let data = encoded(winner_data, encode_winner(&winner))?;
                batch.write(winner_data, winner_version, data)
            }
            None => {
                let mut winner = WinnerAccount::new(request.solver, &request.winner_name);
                winner.record_win(challenge.prize);
                let data = encoded(winner_data, encode_winner(&winner))?;
                batch.create(winner_data, request.solver, data)
            }
        };
        let batch = batch.close(request.challenge, version, challenge.payer);

        Ok((batch, winner_data, challenge.prize, moves.len()))
    }
}

impl<L: Ledger, D: AddressDeriver> EscrowApi for EscrowService<L, D> {
    #[instrument(
        skip(self, request),
        fields(sponsor = %request.sponsor.short(), name = %request.name, prize = request.prize)
    )]
    fn init_challenge(
        &self,
        request: InitChallengeRequest,
    ) -> Result<InitChallengeReceipt, EscrowError> {
        let committed = self
            .build_init(&request)
            .and_then(|(batch, sponsor_data, ordinal)| {
                let signature = self.ledger.commit(batch)?;
                Ok(InitChallengeReceipt {
                    signature,
                    sponsor_data,
                    challenge: request.challenge_address,
                    ordinal,
                })
            });

        match committed {
            Ok(receipt) => {
                {
                    let mut stats = self.stats.lock();
                    stats.challenges_created += 1;
                    stats.prize_locked = stats.prize_locked.saturating_add(request.prize);
                }
                info!(
                    challenge = %receipt.challenge.short(),
                    ordinal = receipt.ordinal,
                    tx = %receipt.signature,
                    "[cube-04] Challenge funded"
                );
                Ok(receipt)
            }
            Err(err) => {
                self.reject(&err);
                warn!(code = err.code(), error = %err, "[cube-04] Init rejected");
                Err(err)
            }
        }
    }

    #[instrument(
        skip(self, request),
        fields(solver = %request.solver.short(), challenge = %request.challenge.short())
    )]
    fn try_solution(&self, request: TrySolutionRequest) -> Result<SolveReceipt, EscrowError> {
        let committed = self
            .build_solve(&request)
            .and_then(|(batch, winner_data, prize, moves)| {
                let signature = self.ledger.commit(batch)?;
                Ok(SolveReceipt {
                    signature,
                    winner_data,
                    prize,
                    moves,
                })
            });

        match committed {
            Ok(receipt) => {
                {
                    let mut stats = self.stats.lock();
                    stats.challenges_solved += 1;
                    stats.prize_paid = stats.prize_paid.saturating_add(receipt.prize);
                }
                info!(
                    prize = receipt.prize,
                    moves = receipt.moves,
                    tx = %receipt.signature,
                    "[cube-04] Challenge solved"
                );
                Ok(receipt)
            }
            Err(err) => {
                self.reject(&err);
                warn!(code = err.code(), error = %err, "[cube-04] Solution rejected");
                Err(err)
            }
        }
    }

    fn peek_cube(&self, moves: &str, challenge: Option<&Address>) -> Result<CubeState, EscrowError> {
        let moves = parse_moves_bounded(moves, self.config.max_solution_moves)?;
        let base = match challenge {
            Some(address) => self.load_existing(address, decode_challenge)?.0.cube,
            None => CubeState::identity(),
        };
        let state = base.apply_all(&moves);
        self.stats.lock().peeks += 1;
        debug!(
            moves = moves.len(),
            from_challenge = challenge.is_some(),
            solved = state.is_solved(),
            "peek"
        );
        Ok(state)
    }

    fn init_challenge_with_scramble(
        &self,
        request: ScrambledInitRequest,
    ) -> Result<InitChallengeReceipt, EscrowError> {
        let cube = match self.peek_cube(&request.scramble, None) {
            Ok(cube) => cube,
            Err(err) => {
                self.reject(&err);
                warn!(code = err.code(), error = %err, "[cube-04] Scramble rejected");
                return Err(err);
            }
        };
        self.init_challenge(InitChallengeRequest {
            sponsor: request.sponsor,
            name: request.name,
            description: request.description,
            cube: RawCube::from(cube),
            prize: request.prize,
            challenge_address: request.challenge_address,
        })
    }

    fn get_sponsor(&self, address: &Address) -> Result<SponsorAccount, EscrowError> {
        Ok(self.load_existing(address, decode_sponsor)?.0)
    }

    fn get_challenge(&self, address: &Address) -> Result<ChallengeAccount, EscrowError> {
        Ok(self.load_existing(address, decode_challenge)?.0)
    }

    fn get_winner(&self, address: &Address) -> Result<WinnerAccount, EscrowError> {
        Ok(self.load_existing(address, decode_winner)?.0)
    }

    fn list_sponsors(&self) -> Result<Vec<(Address, SponsorAccount)>, EscrowError> {
        self.list(AccountKind::Sponsor, decode_sponsor)
    }

    fn list_challenges(&self) -> Result<Vec<(Address, ChallengeAccount)>, EscrowError> {
        self.list(AccountKind::Challenge, decode_challenge)
    }

    fn list_winners(&self) -> Result<Vec<(Address, WinnerAccount)>, EscrowError> {
        self.list(AccountKind::Winner, decode_winner)
    }

    fn next_challenge_address(&self, owner: &Address, name: &str) -> Result<Address, EscrowError> {
        let sponsor_data = derive_sponsor_address(&self.deriver, owner, name)?;
        let ordinal = self.next_ordinal(&sponsor_data)?;
        Ok(derive_challenge_address(&self.deriver, &sponsor_data, ordinal)?)
    }
}
