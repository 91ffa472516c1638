#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::{WorldTestState, count_cells, seeded};

    #[test]
    fn aggressive_roll_from_origin_only_heads_down_or_right() {
        // 10x10 open floor, enemy in the top-left corner, player in the bottom-right
        let mut level = String::from("&         \n");
        for _ in 0..8 {
            level.push_str("          \n");
        }
        level.push_str("         @\n");
        let game = WorldTestState::new(&level);
        let enemy = game.world.enemy(EnemyId(0)).expect("enemy present");
        assert_eq!(enemy, GridPos::new(0, 0));
        assert_eq!(game.world.player(), GridPos::new(9, 9));

        let mut seen = Vec::new();
        for seed in 0..200 {
            let step = choose_step(enemy, game.world.player(), 1.0, &mut seeded(seed));
            assert!(
                step == GridPos::new(1, 0) || step == GridPos::new(0, 1),
                "seed {} produced {:?}",
                seed,
                step
            );
            if !seen.contains(&step) {
                seen.push(step);
            }
        }
        assert_eq!(seen.len(), 2, "both axes should come up");
    }

    #[test]
    fn aggressive_step_points_at_the_player_per_axis() {
        let enemy = GridPos::new(5, 5);
        assert_eq!(aggressive_step(enemy, GridPos::new(1, 9), true), GridPos::new(-1, 0));
        assert_eq!(aggressive_step(enemy, GridPos::new(1, 9), false), GridPos::new(0, 1));
        assert_eq!(aggressive_step(enemy, GridPos::new(5, 0), true), GridPos::new(0, 0));
        assert_eq!(aggressive_step(enemy, GridPos::new(5, 0), false), GridPos::new(0, -1));
    }

    #[test]
    fn zero_anger_always_takes_a_random_unit_step() {
        let mut rng = seeded(17);
        for _ in 0..200 {
            let step = choose_step(GridPos::new(0, 0), GridPos::new(9, 9), 0.0, &mut rng);
            assert_eq!(step.col.abs() + step.row.abs(), 1, "{:?}", step);
        }
    }

    #[test]
    fn random_steps_cover_all_four_directions() {
        let mut rng = seeded(23);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let step = random_step(&mut rng);
            if !seen.contains(&step) {
                seen.push(step);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn sampled_anger_stays_in_band() {
        let mut rng = seeded(31);
        for _ in 0..1000 {
            let anger = sample_anger(&mut rng);
            assert!((0.1..0.3 + f32::EPSILON).contains(&anger), "{}", anger);
        }
    }

    #[test]
    fn catching_the_player_moves_nobody() {
        let level = r#"
@&
"#;
        let mut caught = 0;
        for seed in 0..50 {
            let mut game = WorldTestState::new(level);
            let mut rng = seeded(seed);
            let anger = sample_anger(&mut rng);
            let outcome = evolve_enemy(&mut game.world, EnemyId(0), anger, &mut rng);
            if outcome == EnemyOutcome::CaughtPlayer {
                caught += 1;
            }
            assert!(!matches!(outcome, EnemyOutcome::Moved(_)), "seed {}: {:?}", seed, outcome);
            assert_eq!(game.world.player(), GridPos::new(0, 0));
            assert_eq!(game.world.enemy(EnemyId(0)), Some(GridPos::new(1, 0)));
        }
        assert!(caught > 0, "some roll should reach the player");
    }

    #[test]
    fn walled_in_enemies_never_move() {
        let level = r#"
####
#&&#
####
#@ #
"#;
        let mut game = WorldTestState::new(level);
        let mut rng = seeded(4);
        for _ in 0..100 {
            let outcomes = evolve_enemies(&mut game.world, &mut rng);
            assert_eq!(outcomes.len(), 2);
            assert!(outcomes.iter().all(|o| matches!(o, EnemyOutcome::Blocked(_))));
        }
        game.assert_matches(level);
    }

    #[test]
    fn enemies_only_ever_land_on_floor() {
        let world = World::generate(BoundsOriginRoot::new(20, 10), 0.3, 8, &mut seeded(8)).expect("grid should generate");
        let mut game = WorldTestState { world };
        let mut rng = seeded(80);
        let player = game.world.player();
        for _ in 0..300 {
            let before = game.world.enemies().to_vec();
            let outcomes = evolve_enemies(&mut game.world, &mut rng);
            for (i, outcome) in outcomes.into_iter().enumerate() {
                let now = game.world.enemies()[i];
                match outcome {
                    EnemyOutcome::Moved(pos) => {
                        assert_eq!(pos, now);
                        let delta = (now.col - before[i].col).abs() + (now.row - before[i].row).abs();
                        assert_eq!(delta, 1);
                    }
                    _ => assert_eq!(now, before[i]),
                }
            }
            assert_eq!(game.world.player(), player);
            assert_eq!(count_cells(&game.world, Cell::Enemy), 8);
        }
    }
}
