//! # Escrow Flow Integration
//!
//! Init, solve, peek and query flows through `EscrowService` against the
//! in-memory ledger, checking balances and aggregates after each step.

#[cfg(test)]
mod tests {
    use crate::support::{random_scramble, Harness};
    use cube_01_state_model::{CubeState, RawCube};
    use cube_02_move_notation::parse_moves;
    use cube_03_address_derivation::derive_winner_address;
    use cube_04_escrow::{
        EscrowApi, EscrowConfig, EscrowError, InitChallengeRequest, ScrambledInitRequest,
        CHALLENGE_ACCOUNT_LEN, SPONSOR_ACCOUNT_LEN, WINNER_ACCOUNT_LEN,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::{Address, LAMPORTS_PER_SOL};

    const SOLUTION: &str = "D F' L' F U B' U2 F D2 L D2 R2 L2 F2 D L2 F2 U' R2 F2 B2 D'";
    const SCRAMBLE: &str =
        "R' U' F R' B' L2 F2 L D2 L D2 R' B2 D F2 R2 D2 R U B F' U' R U2 L' D' U' R' U' F";
    const PRIZE: u64 = LAMPORTS_PER_SOL / 2;

    fn scrambled() -> CubeState {
        CubeState::new(
            [0, 2, 0, 0, 2, 1, 2, 2],
            [3, 5, 6, 2, 4, 8, 7, 1],
            [0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1],
            [5, 4, 6, 8, 11, 12, 3, 2, 7, 9, 1, 10],
        )
        .unwrap()
    }

    // =============================================================================
    // INIT CHALLENGE
    // =============================================================================

    #[test]
    fn test_init_locks_prize_and_deposits() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let before = h.ledger.balance(&sponsor);

        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        assert_eq!(receipt.ordinal, 0);

        let schedule = h.ledger.schedule();
        let challenge_deposit = schedule.deposit_for(CHALLENGE_ACCOUNT_LEN);
        let sponsor_deposit = schedule.deposit_for(SPONSOR_ACCOUNT_LEN);
        assert_eq!(
            h.ledger.balance(&receipt.challenge),
            PRIZE + challenge_deposit
        );
        assert_eq!(
            h.ledger.balance(&sponsor),
            before - PRIZE - challenge_deposit - sponsor_deposit
        );

        let stored = h.service.get_challenge(&receipt.challenge).unwrap();
        assert_eq!(stored.cube, scrambled());
        assert_eq!(stored.sponsor, receipt.sponsor_data);
        assert_eq!(stored.payer, sponsor);
    }

    #[test]
    fn test_two_inits_get_consecutive_ordinals() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);

        let first = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let second = h
            .open_challenge(sponsor, "acme", scrambled(), 3 * PRIZE)
            .unwrap();

        assert_eq!(first.ordinal, 0);
        assert_eq!(second.ordinal, 1);
        assert_ne!(first.challenge, second.challenge);
        assert_eq!(first.sponsor_data, second.sponsor_data);

        let aggregate = h.service.get_sponsor(&first.sponsor_data).unwrap();
        assert_eq!(aggregate.challenges_created, 2);
        assert_eq!(aggregate.total_fund, 4 * PRIZE);
        assert_eq!(h.service.list_challenges().unwrap().len(), 2);
    }

    #[test]
    fn test_later_init_keeps_original_description() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let first = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();

        let mut request = h.init_request(sponsor, "acme", scrambled(), PRIZE);
        request.description = "something else entirely".into();
        h.service.init_challenge(request).unwrap();

        let aggregate = h.service.get_sponsor(&first.sponsor_data).unwrap();
        assert_eq!(aggregate.description, "acme puzzles");
        assert_eq!(aggregate.name, "acme");
    }

    #[test]
    fn test_names_split_sponsor_aggregates() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let a = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let b = h.open_challenge(sponsor, "zeta", scrambled(), PRIZE).unwrap();
        assert_ne!(a.sponsor_data, b.sponsor_data);
        assert_eq!(b.ordinal, 0);
        assert_eq!(h.service.list_sponsors().unwrap().len(), 2);
    }

    #[test]
    fn test_long_name_and_description_rejected_without_effects() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let balance = h.ledger.balance(&sponsor);

        let name = "n".repeat(31);
        let err = h
            .open_challenge(sponsor, &name, scrambled(), PRIZE)
            .unwrap_err();
        assert!(matches!(err, EscrowError::SponsorNameTooLong { len: 31, .. }));
        assert_eq!(err.error_number(), Some(6002));

        let mut request = h.init_request(sponsor, "acme", scrambled(), PRIZE);
        request.description = "d".repeat(73);
        let err = h.service.init_challenge(request).unwrap_err();
        assert!(matches!(err, EscrowError::SponsorDescTooLong { len: 73, .. }));
        assert_eq!(err.error_number(), Some(6003));

        assert_eq!(h.ledger.balance(&sponsor), balance);
        assert_eq!(h.ledger.transaction_count(), 0);
    }

    #[test]
    fn test_zero_prize_and_malformed_cube_rejected() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);

        let err = h
            .open_challenge(sponsor, "acme", scrambled(), 0)
            .unwrap_err();
        assert_eq!(err.code(), "ZeroPrize");

        let mut request = h.init_request(sponsor, "acme", scrambled(), PRIZE);
        request.cube = RawCube {
            co: [1, 0, 0, 0, 0, 0, 0, 0],
            ..RawCube::from(CubeState::identity())
        };
        let err = h.service.init_challenge(request).unwrap_err();
        assert!(matches!(err, EscrowError::MalformedCube(_)));
        assert!(h.service.list_sponsors().unwrap().is_empty());
    }

    #[test]
    fn test_init_from_scramble_stores_scrambled_state() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let challenge_address = h.service.next_challenge_address(&sponsor, "acme").unwrap();

        let receipt = h
            .service
            .init_challenge_with_scramble(ScrambledInitRequest {
                sponsor,
                name: "acme".into(),
                description: "acme puzzles".into(),
                scramble: SCRAMBLE.into(),
                prize: PRIZE,
                challenge_address,
            })
            .unwrap();
        assert_eq!(receipt.challenge, challenge_address);
        assert_eq!(
            h.service.get_challenge(&receipt.challenge).unwrap().cube,
            scrambled()
        );

        let solver = h.wallet(2, 1);
        let solved = h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap();
        assert_eq!(solved.prize, PRIZE);
    }

    #[test]
    fn test_init_from_bad_scramble_has_no_effect() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let challenge_address = h.service.next_challenge_address(&sponsor, "acme").unwrap();

        let err = h
            .service
            .init_challenge_with_scramble(ScrambledInitRequest {
                sponsor,
                name: "acme".into(),
                description: String::new(),
                scramble: "R U x".into(),
                prize: PRIZE,
                challenge_address,
            })
            .unwrap_err();
        assert!(matches!(err, EscrowError::InvalidMove { position: 2, .. }));
        assert_eq!(h.ledger.transaction_count(), 0);
        assert_eq!(h.service.stats().rejected_requests, 1);
    }

    #[test]
    fn test_reused_address_is_ordinal_mismatch() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let stale: InitChallengeRequest = h.init_request(sponsor, "acme", scrambled(), PRIZE);
        h.service.init_challenge(stale.clone()).unwrap();

        let err = h.service.init_challenge(stale).unwrap_err();
        assert!(matches!(err, EscrowError::OrdinalMismatch { .. }));
        assert_eq!(err.error_number(), Some(6007));
    }

    // =============================================================================
    // TRY SOLUTION
    // =============================================================================

    #[test]
    fn test_garbage_solution_is_invalid_move() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let before = h.ledger.balance(&receipt.challenge);

        let err = h.submit(solver, "ana", receipt.challenge, "hi").unwrap_err();
        assert!(matches!(err, EscrowError::InvalidMove { position: 0, .. }));
        assert_eq!(err.error_number(), Some(6000));
        assert_eq!(h.ledger.balance(&receipt.challenge), before);
        assert_eq!(
            h.service.get_challenge(&receipt.challenge).unwrap().cube,
            scrambled()
        );
    }

    #[test]
    fn test_wrong_solution_is_unsolved() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let challenge_before = h.ledger.balance(&receipt.challenge);
        let solver_before = h.ledger.balance(&solver);

        let err = h
            .submit(solver, "ana", receipt.challenge, "R U R' D F2 B2")
            .unwrap_err();
        assert!(matches!(err, EscrowError::UnsolvedCube));
        assert_eq!(err.error_number(), Some(6001));
        assert_eq!(h.ledger.balance(&receipt.challenge), challenge_before);
        assert_eq!(h.ledger.balance(&solver), solver_before);
        assert!(h.service.get_challenge(&receipt.challenge).is_ok());
        assert_eq!(h.service.stats().failed_attempts, 1);
    }

    #[test]
    fn test_solve_pays_solver_and_refunds_deposit() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let sponsor_before = h.ledger.balance(&sponsor);
        let solver_before = h.ledger.balance(&solver);
        let total_before = h.ledger.total_lamports();

        let solved = h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap();
        assert_eq!(solved.prize, PRIZE);
        assert_eq!(solved.moves, 22);

        let schedule = h.ledger.schedule();
        assert_eq!(
            h.ledger.balance(&solver),
            solver_before + PRIZE - schedule.deposit_for(WINNER_ACCOUNT_LEN)
        );
        assert_eq!(
            h.ledger.balance(&sponsor),
            sponsor_before + schedule.deposit_for(CHALLENGE_ACCOUNT_LEN)
        );
        assert_eq!(h.ledger.balance(&receipt.challenge), 0);
        assert_eq!(h.ledger.total_lamports(), total_before);

        let winner = h.service.get_winner(&solved.winner_data).unwrap();
        assert_eq!(winner.winner, solver);
        assert_eq!(winner.challenges_won, 1);
        assert_eq!(winner.cashed_prize, PRIZE);

        let aggregate = h.service.get_sponsor(&receipt.sponsor_data).unwrap();
        assert_eq!(aggregate.challenges_created, 1);
        assert_eq!(aggregate.total_fund, PRIZE);
    }

    #[test]
    fn test_solved_challenge_is_gone_for_good() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap();

        for moves in [SOLUTION, "R U R' D F2 B2", "hi", ""] {
            let err = h.submit(solver, "ana", receipt.challenge, moves).unwrap_err();
            assert!(err.is_not_found(), "{moves:?} gave {err}");
        }
        let err = h
            .submit(solver, &"w".repeat(31), receipt.challenge, SOLUTION)
            .unwrap_err();
        assert!(err.is_not_found(), "long winner name gave {err}");
        assert!(h.service.list_challenges().unwrap().is_empty());
        assert!(h
            .service
            .peek_cube("R", Some(&receipt.challenge))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_second_win_upserts_winner() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let mut rng = StdRng::seed_from_u64(99);

        let (first_cube, first_solution) = random_scramble(&mut rng, 20);
        let (second_cube, second_solution) = random_scramble(&mut rng, 20);
        let first = h.open_challenge(sponsor, "acme", first_cube, PRIZE).unwrap();
        let second = h
            .open_challenge(sponsor, "acme", second_cube, 2 * PRIZE)
            .unwrap();

        let a = h
            .submit(solver, "ana", first.challenge, &first_solution.to_string())
            .unwrap();
        let b = h
            .submit(solver, "ana", second.challenge, &second_solution.to_string())
            .unwrap();
        assert_eq!(a.winner_data, b.winner_data);

        let winner = h.service.get_winner(&a.winner_data).unwrap();
        assert_eq!(winner.challenges_won, 2);
        assert_eq!(winner.cashed_prize, 3 * PRIZE);
        assert_eq!(h.service.list_winners().unwrap().len(), 1);
    }

    #[test]
    fn test_winner_name_and_length_limits() {
        let h = Harness::with_config(EscrowConfig {
            max_solution_moves: 10,
            ..EscrowConfig::default()
        });
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();

        let err = h
            .submit(solver, &"w".repeat(31), receipt.challenge, SOLUTION)
            .unwrap_err();
        assert_eq!(err.code(), "WinnerNameTooLong");

        let err = h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap_err();
        assert!(matches!(
            err,
            EscrowError::MoveSequenceTooLong { count: 22, max: 10 }
        ));
        assert!(h.service.get_challenge(&receipt.challenge).is_ok());
    }

    #[test]
    fn test_prize_sent_to_next_challenge_address_does_not_block_sponsor() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();

        // The prize lands on the address the sponsor's next challenge needs.
        let squatter = h.service.next_challenge_address(&sponsor, "acme").unwrap();
        h.ledger.fund(squatter, LAMPORTS_PER_SOL);
        h.submit(squatter, "ana", receipt.challenge, SOLUTION).unwrap();
        let held = h.ledger.balance(&squatter);
        assert!(held > 0);
        assert!(h.service.get_challenge(&squatter).unwrap_err().is_not_found());

        let second = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        assert_eq!(second.challenge, squatter);
        assert_eq!(second.ordinal, 1);
        assert_eq!(h.ledger.balance(&squatter), held + PRIZE);
        assert_eq!(h.service.get_challenge(&squatter).unwrap().cube, scrambled());
    }

    #[test]
    fn test_funded_winner_address_is_taken_over() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();

        let winner_data = derive_winner_address(h.service.deriver(), &solver, "ana").unwrap();
        h.ledger.fund(winner_data, 1_000);

        let solved = h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap();
        assert_eq!(solved.winner_data, winner_data);
        let winner = h.service.get_winner(&winner_data).unwrap();
        assert_eq!(winner.challenges_won, 1);
        assert_eq!(
            h.ledger.balance(&winner_data),
            h.ledger.schedule().deposit_for(WINNER_ACCOUNT_LEN)
        );
    }

    #[test]
    fn test_unknown_challenge_is_not_found() {
        let h = Harness::new();
        let solver = h.wallet(2, 1);
        let err = h
            .submit(solver, "ana", Address::new([0xEE; 32]), SOLUTION)
            .unwrap_err();
        assert!(matches!(err, EscrowError::AccountNotFound(_)));
        assert_eq!(err.error_number(), None);
    }

    // =============================================================================
    // PEEK AND QUERIES
    // =============================================================================

    #[test]
    fn test_peek_matches_apply_and_never_writes() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let tx_before = h.ledger.transaction_count();

        let peeked = h.service.peek_cube("R U R' U'", None).unwrap();
        let expected = CubeState::identity().apply_all(&parse_moves("R U R' U'").unwrap());
        assert_eq!(peeked, expected);

        let half = "D F' L' F U B' U2 F D2 L D2";
        let peeked = h.service.peek_cube(half, Some(&receipt.challenge)).unwrap();
        assert_eq!(
            peeked,
            scrambled().apply_all(&parse_moves(half).unwrap())
        );
        assert!(h
            .service
            .peek_cube(SOLUTION, Some(&receipt.challenge))
            .unwrap()
            .is_solved());

        assert_eq!(h.ledger.transaction_count(), tx_before);
        assert_eq!(
            h.service.get_challenge(&receipt.challenge).unwrap().cube,
            scrambled()
        );
        assert_eq!(h.service.stats().peeks, 3);
    }

    #[test]
    fn test_next_challenge_address_tracks_ordinal() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let predicted = h.service.next_challenge_address(&sponsor, "acme").unwrap();
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        assert_eq!(predicted, receipt.challenge);

        let next = h.service.next_challenge_address(&sponsor, "acme").unwrap();
        assert_ne!(next, receipt.challenge);
        let second = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        assert_eq!(next, second.challenge);
    }

    #[test]
    fn test_stats_follow_outcomes() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 10);
        let solver = h.wallet(2, 1);
        let receipt = h.open_challenge(sponsor, "acme", scrambled(), PRIZE).unwrap();
        let _ = h.submit(solver, "ana", receipt.challenge, "hi");
        let _ = h.submit(solver, "ana", receipt.challenge, "R");
        h.submit(solver, "ana", receipt.challenge, SOLUTION).unwrap();

        let stats = h.service.stats();
        assert_eq!(stats.challenges_created, 1);
        assert_eq!(stats.challenges_solved, 1);
        assert_eq!(stats.failed_attempts, 1);
        assert_eq!(stats.rejected_requests, 1);
        assert_eq!(stats.prize_locked, PRIZE);
        assert_eq!(stats.prize_paid, PRIZE);
    }
}
