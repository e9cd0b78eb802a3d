#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::{ENEMY_BASE_RADIUS, ENEMY_PULSE_AMPLITUDE};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{heading_vector, pulse_radius, Position, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        for v in [GamePhase::Playing, GamePhase::GameOver] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_turn_direction_serde() {
        for v in [TurnDirection::Left, TurnDirection::Right] {
            let json = serde_json::to_string(&v).unwrap();
            let back: TurnDirection = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move { forward: true },
            PlayerCommand::Move { forward: false },
            PlayerCommand::Turn {
                direction: TurnDirection::Left,
            },
            PlayerCommand::Fire,
            PlayerCommand::ToggleAssist,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired,
            GameEvent::EnemyDown { score: 3 },
            GameEvent::PlayerHit { life_remaining: 4 },
            GameEvent::ShotMissed { missed: 9 },
            GameEvent::GameOver,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.tick, back.tick);
        assert_eq!(snapshot.phase, back.phase);
        // The empty snapshot should stay small; it is emitted 60 times a second.
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify heading vector orientation: yaw 0 is +X, yaw 90 is +Y.
    #[test]
    fn test_heading_vector() {
        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-10);
        assert!(east.y.abs() < 1e-10);

        let north = heading_vector(90.0);
        assert!(north.x.abs() < 1e-10);
        assert!((north.y - 1.0).abs() < 1e-10);

        let west = heading_vector(180.0);
        assert!((west.x + 1.0).abs() < 1e-10);

        // Unbounded yaw wraps through trigonometry.
        let wrapped = heading_vector(360.0 + 90.0);
        assert!((wrapped.y - 1.0).abs() < 1e-10);
    }

    /// Verify the pulsation radius stays within its amplitude band.
    #[test]
    fn test_pulse_radius_bounds() {
        assert!((pulse_radius(0.0) - ENEMY_BASE_RADIUS).abs() < 1e-10);

        let lo = ENEMY_BASE_RADIUS * (1.0 - ENEMY_PULSE_AMPLITUDE);
        let hi = ENEMY_BASE_RADIUS * (1.0 + ENEMY_PULSE_AMPLITUDE);
        let mut phase = 0.0;
        for _ in 0..1000 {
            let r = pulse_radius(phase);
            assert!(r >= lo - 1e-10 && r <= hi + 1e-10);
            phase += 0.09;
        }

        // Peaks of the sine hit the band edges.
        assert!((pulse_radius(std::f64::consts::FRAC_PI_2) - hi).abs() < 1e-10);
        assert!((pulse_radius(-std::f64::consts::FRAC_PI_2) - lo).abs() < 1e-10);
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distances() {
        let a = Position::on_floor(0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert!((a.planar_distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.planar_distance_sq_to(&b) - 25.0).abs() < 1e-10);
        assert!((a.distance_sq_to(&b) - 169.0).abs() < 1e-10);
    }

    /// Verify Velocity speed magnitude.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }
}
