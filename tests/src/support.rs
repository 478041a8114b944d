//! # Test Support
//!
//! Shared harness for the integration suite and the benchmarks.

use cube_01_state_model::{CubeState, Move, RawCube};
use cube_02_move_notation::MoveSequence;
use cube_03_address_derivation::Sha256Deriver;
use cube_04_escrow::{
    EscrowApi, EscrowConfig, EscrowError, EscrowService, InMemoryLedger, InitChallengeReceipt,
    InitChallengeRequest, SolveReceipt, TrySolutionRequest,
};
use rand::Rng;
use shared_types::{Address, Lamports, LAMPORTS_PER_SOL};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a `fmt` subscriber once per process. `RUST_LOG` overrides the
/// default `warn` filter.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Escrow service type used throughout the suite.
pub type TestService = EscrowService<Arc<InMemoryLedger>, Sha256Deriver>;

/// A service wired to an in-memory ledger the test can inspect.
pub struct Harness {
    /// Ledger shared with the service.
    pub ledger: Arc<InMemoryLedger>,
    /// Service under test.
    pub service: TestService,
}

impl Harness {
    /// Fresh ledger, default deriver and default limits.
    pub fn new() -> Self {
        Self::with_config(EscrowConfig::default())
    }

    /// Fresh ledger with custom limits.
    pub fn with_config(config: EscrowConfig) -> Self {
        init_tracing();
        let ledger = Arc::new(InMemoryLedger::new());
        let service = EscrowService::new(ledger.clone(), Sha256Deriver::default(), config)
            .unwrap_or_else(|err| panic!("invalid test config: {err}"));
        Self { ledger, service }
    }

    /// Wallet with `sol` whole SOL.
    pub fn wallet(&self, seed: u8, sol: u64) -> Address {
        let address = Address::new([seed; 32]);
        self.ledger.fund(address, sol * LAMPORTS_PER_SOL);
        address
    }

    /// Init request targeting the sponsor's next challenge address.
    pub fn init_request(
        &self,
        sponsor: Address,
        name: &str,
        cube: CubeState,
        prize: Lamports,
    ) -> InitChallengeRequest {
        let challenge_address = self
            .service
            .next_challenge_address(&sponsor, name)
            .unwrap_or_else(|err| panic!("cannot derive challenge address: {err}"));
        InitChallengeRequest {
            sponsor,
            name: name.to_string(),
            description: format!("{name} puzzles"),
            cube: RawCube::from(cube),
            prize,
            challenge_address,
        }
    }

    /// Create a challenge at the sponsor's next ordinal.
    pub fn open_challenge(
        &self,
        sponsor: Address,
        name: &str,
        cube: CubeState,
        prize: Lamports,
    ) -> Result<InitChallengeReceipt, EscrowError> {
        let request = self.init_request(sponsor, name, cube, prize);
        self.service.init_challenge(request)
    }

    /// Submit a solution as `solver` under `winner_name`.
    pub fn submit(
        &self,
        solver: Address,
        winner_name: &str,
        challenge: Address,
        moves: &str,
    ) -> Result<SolveReceipt, EscrowError> {
        self.service.try_solution(TrySolutionRequest {
            solver,
            challenge,
            moves: moves.to_string(),
            winner_name: winner_name.to_string(),
        })
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random sequence of `len` atomic moves.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> MoveSequence {
    (0..len)
        .map(|_| Move::ALL[rng.gen_range(0..Move::ALL.len())])
        .collect()
}

/// Scrambled cube together with the sequence that solves it.
pub fn random_scramble<R: Rng>(rng: &mut R, len: usize) -> (CubeState, MoveSequence) {
    let scramble = random_sequence(rng, len);
    let state = CubeState::identity().apply_all(&scramble);
    (state, scramble.inverse())
}
