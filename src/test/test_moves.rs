
#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# @#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#@$ .#
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_move(Right);

        let expected_level = r#"
# @$.#
"#;
        game.assert_matches(expected_level);
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerAndBoxMove)));
    }

    #[test]
    fn when_walk_reports_player_move(){
        let mut game = GameTestState::new(r#"
#@ #
"#);
        let update = game.assert_move(Right);
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerMove)));
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
#@$$ ..#
"#;
        let mut game = GameTestState::new(level);
        let update = game.try_step(Right);

        let expected_level = r#"
#@$$ ..#
"#;
        game.assert_matches(expected_level);
        assert!(matches!(update, GameUpdate::Error(StepError::CrateBlocked(Vec2 { i: 0, j: 2 }))));
    }

    #[test]
    fn when_block_pushed_into_wall_is_rejected(){
        let mut game = GameTestState::new(r#"
#.@$#
"#);
        let update = game.try_step(Right);

        game.assert_matches(r#"
#.@$#
"#);
        assert!(matches!(update, GameUpdate::Error(StepError::CrateBlocked(_))));
    }

    #[test]
    fn when_block_pushed_off_map_is_rejected(){
        let mut game = GameTestState::new(r#"
.@$
"#);
        let update = game.try_step(Right);
        assert!(matches!(update, GameUpdate::Error(StepError::CrateBlocked(_))));
    }

    #[test]
    fn when_walking_off_map_or_into_wall_is_rejected(){
        let mut game = GameTestState::new(r#"
#@
"#);
        assert!(matches!(game.try_step(Up), GameUpdate::Error(StepError::OutOfBounds)));
        assert!(matches!(game.try_step(Down), GameUpdate::Error(StepError::OutOfBounds)));
        assert!(matches!(game.try_step(Left), GameUpdate::Error(StepError::IntoWall)));
        game.assert_matches(r#"
#@
"#);
    }

    #[test]
    fn when_box_pushed_over_target_player_lands_on_target(){
        let mut game = GameTestState::new(r#"
#@$. #
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# @* #
"#);
        assert!(game.game_state.is_won(&game.shared));

        game.assert_move(Right);
        game.assert_matches(r#"
#  +$#
"#);
        assert!(!game.game_state.is_won(&game.shared));
    }

    #[test]
    fn when_block_moves_game_is_inequal(){
        let level = r#"
#@$ .#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_move(Right);
        let new_state = game.game_state.clone();

        let expected_level = r#"
# @$.#
"#;
        game.assert_matches(expected_level);
        assert_ne!(original_state, new_state);
        assert_ne!(original_state.state_key(), new_state.state_key());
    }

    #[test]
    fn when_player_moves_back_game_is_equal(){
        let level = r#"
#@ $.#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_move(Right);
        game.assert_move(Left);
        let new_state = game.game_state.clone();

        let expected_level = r#"
#@ $.#
"#;
        game.assert_matches(expected_level);
        assert_eq!(original_state, new_state);
        assert_eq!(original_state.state_key(), new_state.state_key());
    }

    #[test]
    fn when_blocks_swap_game_remains_equal(){
        let level = r#"
#    #
#@$  #
# $  #
#  ..#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#  ..#
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);
        let new_state = game.game_state.clone();


        let expected_level = r#"
#    #
#@$  #
# $  #
#  ..#
"#;
        game.assert_matches(expected_level);

        assert_eq!(original_state, new_state);
        assert_eq!(original_state.state_key(), new_state.state_key());
    }

    #[test]
    fn parent_state_is_untouched_by_child_moves(){
        let game = GameTestState::new(r#"
#@$ .#
"#);
        let parent = game.game_state.clone();
        let GameUpdate::NextState(child, _) = step(&game.shared, &parent, Right) else {
            panic!("expected push to succeed");
        };

        assert_eq!(parent, game.game_state);
        assert_eq!(child.player, Vec2 { i: 0, j: 2 });
        assert!(parent.has_box_at(&Vec2 { i: 0, j: 2 }));
        assert!(child.has_box_at(&Vec2 { i: 0, j: 3 }));
    }

    #[test]
    fn replay_applies_moves_in_order(){
        let game = GameTestState::new(r#"
#######
#.    #
# $$ .#
#  @  #
#######
"#);
        let end = game.replayed("lurrull");
        assert!(end.is_won(&game.shared));
        assert_eq!(end.player, Vec2 { i: 1, j: 2 });
    }

    #[test]
    fn replay_reports_first_bad_move(){
        let game = GameTestState::new(r#"
#@$.#
"#);
        assert_eq!(
            replay(&game.shared, &game.game_state, "rx"),
            Err(ReplayError::UnknownMove { index: 1, found: 'x' })
        );
        assert_eq!(
            replay(&game.shared, &game.game_state, "lr"),
            Err(ReplayError::Rejected { index: 0, direction: Left, reason: StepError::IntoWall })
        );
        assert_eq!(
            replay(&game.shared, &game.game_state, ""),
            Ok(game.game_state.clone())
        );
    }

    #[test]
    fn random_rollouts_keep_board_invariants(){
        let game = GameTestState::new(r#"
#######
#.    #
# $$ .#
#  @  #
#######
"#);
        let mut rng = StdRng::seed_from_u64(0x50_4b_4f);
        for _ in 0..50 {
            let mut state = game.game_state.clone();
            for _ in 0..60 {
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                if let GameUpdate::NextState(next, _) = step(&game.shared, &state, direction) {
                    state = next;
                }

                let players: Vec<Vec2> = state.occupants.iter()
                    .filter(|(_, o)| **o == Occupant::Player)
                    .map(|(p, _)| p)
                    .collect();
                assert_eq!(players, vec![state.player]);
                assert_eq!(state.iter_boxes().count(), game.shared.total_targets());
                assert!(!game.shared.is_wall(&state.player));
                assert!(state.iter_boxes().all(|b| !game.shared.is_wall(&b)));
            }
        }
    }
}
