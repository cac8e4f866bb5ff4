/// End to end tests driving the environment, frontier and record arena together
/// through `search::solve` on the bundled domains.
///
/// Set `RUST_LOG=debug` (or `trace`) to watch the searches.

#[cfg(test)]
mod tests {
    use crate::config::{SearchConfig, Strategy};
    use crate::environment::Environment;
    use crate::error::Error;
    use crate::games::corridor::Corridor;
    use crate::games::sliding_puzzle::{EightPuzzle, EightPuzzleRules, Slide, SlidingPuzzle, SlidingRules};
    use crate::search::{solve, SearchOutcome, Solution};
    use crate::utils::AgentId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const AGENT: AgentId = AgentId(1);

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn one_slide_apart<const N: usize>(a: &SlidingPuzzle<N>, b: &SlidingPuzzle<N>) -> bool {
        Slide::ALL.iter().any(|s| a.slide(*s).as_ref() == Some(b))
    }

    fn assert_valid_path<const N: usize>(solution: &Solution<SlidingPuzzle<N>>, start: &SlidingPuzzle<N>) {
        assert_eq!(solution.path.first(), Some(start));
        assert_eq!(solution.path.last(), Some(&SlidingPuzzle::<N>::solved()));
        assert_eq!(solution.path.len(), solution.costs.len());
        for pair in solution.path.windows(2) {
            assert!(one_slide_apart(&pair[0], &pair[1]), "{} -> {} is not one slide", pair[0], pair[1]);
        }
        for pair in solution.costs.windows(2) {
            assert!(pair[0] <= pair[1], "cost went down along the path: {:?}", solution.costs);
        }
        assert_eq!(solution.costs[0], 0.0);
    }

    fn solve_puzzle(start: &EightPuzzle, config: SearchConfig) -> SearchOutcome<EightPuzzle> {
        let mut env = Environment::new(EightPuzzleRules::default());
        solve(&mut env, AGENT, start.clone(), &config).unwrap()
    }

    #[test]
    fn uniform_cost_finds_the_two_slide_path() {
        init();
        let start = EightPuzzle::solved().slide(Slide::Up).and_then(|p| p.slide(Slide::Left)).unwrap();
        assert_eq!(start.rows(), &[[1, 2, 3], [4, 0, 5], [7, 8, 6]]);

        let outcome = solve_puzzle(&start, SearchConfig::default());
        let solution = outcome.solution().expect("two slides from solved");
        assert_valid_path(solution, &start);
        assert_eq!(solution.costs, vec![0.0, 1.0, 2.0]);
        assert_eq!(solution.cost(), 2.0);
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn start_at_goal_needs_no_expansion() {
        let outcome = solve_puzzle(&EightPuzzle::solved(), SearchConfig::default());
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path, vec![EightPuzzle::solved()]);
        assert!(solution.is_empty());
        assert_eq!(outcome.expansions(), 0);
    }

    #[test]
    fn every_strategy_returns_a_valid_path() {
        init();
        let mut rng = StdRng::seed_from_u64(7);
        let start = EightPuzzle::solved().scramble(&mut rng, 30);
        for strategy in [Strategy::UniformCost, Strategy::Greedy, Strategy::AStar, Strategy::BreadthFirst, Strategy::DepthFirst] {
            let outcome = solve_puzzle(&start, SearchConfig::default().with_strategy(strategy));
            match outcome {
                SearchOutcome::Solved(solution) => assert_valid_path(&solution, &start),
                other => panic!("{:?} failed on {}: {:?}", strategy, start, other),
            }
        }
    }

    #[test]
    fn uninformed_orders_agree_on_optimal_cost() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..5 {
            let start = EightPuzzle::solved().scramble(&mut rng, 10);
            let ucs = solve_puzzle(&start, SearchConfig::default());
            let bfs = solve_puzzle(&start, SearchConfig::default().with_strategy(Strategy::BreadthFirst));
            let (ucs, bfs) = (ucs.solution().unwrap(), bfs.solution().unwrap());
            assert_eq!(ucs.cost(), bfs.cost());
            assert!(ucs.cost() <= 10.0);
        }
    }

    #[test]
    fn budget_stops_the_search() {
        init();
        let hardest = EightPuzzle::from_rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap();
        let outcome = solve_puzzle(&hardest, SearchConfig::default().with_max_expansions(5));
        assert_eq!(outcome, SearchOutcome::OutOfBudget { expansions: 5 });
    }

    #[test]
    fn unsolvable_puzzle_exhausts_the_frontier() {
        init();
        let start = SlidingPuzzle::<2>::from_rows([[2, 1], [3, 0]]).unwrap();
        assert!(!start.is_solvable());
        let mut env = Environment::new(SlidingRules::<2>);
        let outcome = solve(&mut env, AGENT, start, &SearchConfig::default()).unwrap();
        // half of the 4! layouts are reachable, each expanded exactly once
        assert_eq!(outcome, SearchOutcome::Exhausted { expansions: 12 });
        assert_eq!(env.stats().expansions, 12);
        assert_eq!(env.stats().memo_hits, 0);
    }

    #[test]
    fn depth_first_solves_the_small_puzzle() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = SlidingPuzzle::<2>::solved().scramble(&mut rng, 9);
        let mut env = Environment::new(SlidingRules::<2>);
        let config = SearchConfig::default().with_strategy(Strategy::DepthFirst);
        match solve(&mut env, AGENT, start.clone(), &config).unwrap() {
            SearchOutcome::Solved(solution) => assert_valid_path(&solution, &start),
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn one_search_per_episode() {
        let start = EightPuzzle::solved().slide(Slide::Left).unwrap();
        let mut env = Environment::new(EightPuzzleRules::default());
        let config = SearchConfig::default();
        assert!(solve(&mut env, AGENT, start.clone(), &config).is_ok());
        assert_eq!(solve(&mut env, AGENT, start.clone(), &config), Err(Error::EpisodeInProgress { memoized: 1 }));

        env.reset();
        let again = solve(&mut env, AGENT, start, &config).unwrap();
        assert_eq!(again.solution().map(|s| s.cost()), Some(1.0));
    }

    #[test]
    fn second_agent_needs_a_fresh_episode() {
        init();
        let start = EightPuzzle::from_rows([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
        let mut env = Environment::new(EightPuzzleRules::default());
        let config = SearchConfig::default();
        let first = solve(&mut env, AgentId(1), start.clone(), &config).unwrap();
        assert!(first.expansions() > 0);

        let memoized = env.memoized_states();
        let live = env.live_tokens();
        assert_eq!(
            solve(&mut env, AgentId(2), start.clone(), &config),
            Err(Error::EpisodeInProgress { memoized })
        );
        // refused before registering, so the episode is untouched
        assert!(env.start_state(AgentId(2)).is_none());
        assert_eq!(env.live_tokens(), live);

        env.reset();
        let second = solve(&mut env, AgentId(2), start, &config).unwrap();
        assert_eq!(second.solution().map(|s| s.cost()), first.solution().map(|s| s.cost()));
    }

    #[test]
    fn agents_share_an_episode_until_something_is_expanded() {
        let mut env = Environment::new(EightPuzzleRules::default());
        let config = SearchConfig::default();
        assert!(solve(&mut env, AgentId(1), EightPuzzle::solved(), &config).is_ok());
        assert_eq!(env.memoized_states(), 0);
        assert_eq!(solve(&mut env, AgentId(1), EightPuzzle::solved(), &config), Err(Error::DuplicateAgent(AgentId(1))));
        let other = solve(&mut env, AgentId(2), EightPuzzle::solved(), &config).unwrap();
        assert_eq!(other.expansions(), 0);
    }

    #[test]
    fn slippery_corridor_walks_straight_to_the_exit() {
        init();
        let mut env = Environment::new(Corridor::new(6, 0.3).unwrap());
        let outcome = solve(&mut env, AGENT, 0, &SearchConfig::informed(100)).unwrap();
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(solution.cost(), 5.0);
        assert!(solution.costs.windows(2).all(|w| w[0] <= w[1]));
    }
}
