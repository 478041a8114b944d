//! # Concurrent Solve Race
//!
//! Several solvers submit a correct solution to the same challenge at the
//! same moment. The ledger's version-checked commit must let exactly one
//! through and pay exactly one prize.

#[cfg(test)]
mod tests {
    use crate::support::{random_scramble, Harness};
    use cube_04_escrow::{EscrowApi, EscrowError, SolveReceipt};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::LAMPORTS_PER_SOL;
    use std::sync::Barrier;
    use std::thread;
    use tracing::info;

    const SOLVERS: u8 = 4;
    const ROUNDS: usize = 25;

    fn race_round(h: &Harness, rng: &mut StdRng) -> Vec<Result<SolveReceipt, EscrowError>> {
        let sponsor = h.wallet(1, 1_000);
        let (cube, solution) = random_scramble(rng, 20);
        let solution = solution.to_string();
        let receipt = h
            .open_challenge(sponsor, "race", cube, LAMPORTS_PER_SOL)
            .unwrap();

        let barrier = Barrier::new(usize::from(SOLVERS));
        thread::scope(|scope| {
            let handles: Vec<_> = (0..SOLVERS)
                .map(|i| {
                    let solver = h.wallet(10 + i, 1);
                    let barrier = &barrier;
                    let solution = solution.as_str();
                    scope.spawn(move || {
                        barrier.wait();
                        h.submit(solver, &format!("solver-{i}"), receipt.challenge, solution)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        })
    }

    #[test]
    fn test_exactly_one_solver_wins() {
        let h = Harness::new();
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for round in 0..ROUNDS {
            let results = race_round(&h, &mut rng);
            let winners = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(winners, 1, "round {round}: {results:?}");

            for err in results.iter().filter_map(|r| r.as_ref().err()) {
                assert!(
                    err.is_not_found() || err.is_conflict(),
                    "round {round}: unexpected {err}"
                );
            }
        }

        let stats = h.service.stats();
        info!(?stats, "race finished");
        assert_eq!(stats.challenges_solved, ROUNDS as u64);
        assert_eq!(stats.prize_paid, ROUNDS as u64 * LAMPORTS_PER_SOL);
        assert!(h.service.list_challenges().unwrap().is_empty());

        let paid: u64 = h
            .service
            .list_winners()
            .unwrap()
            .iter()
            .map(|(_, w)| w.cashed_prize)
            .sum();
        assert_eq!(paid, ROUNDS as u64 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_racing_inits_never_share_an_ordinal() {
        let h = Harness::new();
        let sponsor = h.wallet(1, 1_000);
        let mut rng = StdRng::seed_from_u64(3);
        let (cube, _) = random_scramble(&mut rng, 15);

        let barrier = Barrier::new(4);
        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let barrier = &barrier;
                    let h = &h;
                    scope.spawn(move || {
                        barrier.wait();
                        h.open_challenge(sponsor, "acme", cube, LAMPORTS_PER_SOL)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        let committed: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert!(!committed.is_empty());
        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(
                err.is_conflict() || matches!(err, EscrowError::OrdinalMismatch { .. }),
                "unexpected {err}"
            );
        }

        let mut ordinals: Vec<u64> = committed.iter().map(|r| r.ordinal).collect();
        ordinals.sort_unstable();
        let expected: Vec<u64> = (0..committed.len() as u64).collect();
        assert_eq!(ordinals, expected);

        let sponsor_data = committed[0].sponsor_data;
        let aggregate = h.service.get_sponsor(&sponsor_data).unwrap();
        assert_eq!(aggregate.challenges_created, committed.len() as u64);
        assert_eq!(
            aggregate.total_fund,
            committed.len() as u64 * LAMPORTS_PER_SOL
        );
    }
}
