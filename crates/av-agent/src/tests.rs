//! Unit tests for car state, the roster, and the scenario loader.

use av_core::{Heading, Position};

use crate::CarSpec;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(name: &str, x: i32, y: i32, heading: Heading, script: &str) -> CarSpec {
    CarSpec::new(
        name,
        Position::new(x, y),
        heading,
        script.parse().expect("test script parses"),
    )
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car {
    use super::*;
    use av_core::Command;

    use crate::Car;

    #[test]
    fn turns_rotate_in_place() {
        let mut car = Car::new(spec("CarA", 2, 2, Heading::North, "LR"));
        car.turn_left();
        assert_eq!(car.heading, Heading::West);
        assert_eq!(car.position, Position::new(2, 2));

        car.turn_right();
        assert_eq!(car.heading, Heading::North);
    }

    #[test]
    fn forward_target_follows_heading() {
        let car = Car::new(spec("CarA", 2, 2, Heading::East, "F"));
        assert_eq!(car.forward_target(), Position::new(3, 2));
    }

    #[test]
    fn forward_target_may_leave_any_field() {
        let car = Car::new(spec("CarA", 0, 0, Heading::South, "F"));
        assert_eq!(car.forward_target(), Position::new(0, -1));
    }

    #[test]
    fn command_lookup_exhausts() {
        let car = Car::new(spec("CarA", 0, 0, Heading::North, "FL"));
        assert_eq!(car.command_at(0), Some(Command::Forward));
        assert_eq!(car.command_at(1), Some(Command::TurnLeft));
        assert_eq!(car.command_at(2), None);
    }

    #[test]
    fn deactivation_is_permanent_and_freezes_position() {
        let mut car = Car::new(spec("CarA", 1, 1, Heading::North, "F"));
        assert!(car.is_active());

        car.deactivate();
        assert!(!car.is_active());
        assert_eq!(car.position, Position::new(1, 1));
        assert_eq!(car.name, "CarA");
    }
}

// ── CarRoster ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use super::*;
    use av_core::CarId;

    use crate::CarRoster;

    #[test]
    fn push_assigns_dense_registration_ids() {
        let mut roster = CarRoster::new();
        let a = roster.push(spec("CarA", 0, 0, Heading::North, "F"));
        let b = roster.push(spec("CarB", 1, 0, Heading::North, "FF"));

        assert_eq!(a, CarId(0));
        assert_eq!(b, CarId(1));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.ids().collect::<Vec<_>>(), vec![CarId(0), CarId(1)]);
        assert_eq!(roster.get(b).name, "CarB");
    }

    #[test]
    fn contains_name_is_exact() {
        let mut roster = CarRoster::new();
        roster.push(spec("CarA", 0, 0, Heading::North, "F"));

        assert!(roster.contains_name("CarA"));
        assert!(!roster.contains_name("cara"));
        assert!(!roster.contains_name("CarB"));
    }

    #[test]
    fn max_script_len_drives_the_tick_count() {
        let mut roster = CarRoster::new();
        assert_eq!(roster.max_script_len(), 0);

        roster.push(spec("CarA", 0, 0, Heading::North, "FF"));
        roster.push(spec("CarB", 1, 0, Heading::North, "FFFFF"));
        roster.push(spec("CarC", 2, 0, Heading::North, ""));
        assert_eq!(roster.max_script_len(), 5);
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut roster = CarRoster::new();
        roster.push(spec("CarB", 0, 0, Heading::North, "F"));
        roster.push(spec("CarA", 1, 0, Heading::North, "F"));

        let names: Vec<_> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CarB", "CarA"]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use std::io::Cursor;

    use crate::{load_specs_reader, RosterError};

    #[test]
    fn loads_rows_in_order() {
        let csv = "name,x,y,heading,script\nCarA,2,2,N,FFRFF\nCarB,0,0,e,fffff\n";
        let specs = load_specs_reader(Cursor::new(csv)).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "CarA");
        assert_eq!(specs[0].position, Position::new(2, 2));
        assert_eq!(specs[0].heading, Heading::North);
        assert_eq!(specs[0].script.to_string(), "FFRFF");
        assert_eq!(specs[1].heading, Heading::East);
        assert_eq!(specs[1].script.len(), 5);
    }

    #[test]
    fn empty_script_cell_is_a_valid_empty_script() {
        let csv = "name,x,y,heading,script\nCarA,0,0,N,\n";
        let specs = load_specs_reader(Cursor::new(csv)).unwrap();
        assert!(specs[0].script.is_empty());
    }

    #[test]
    fn bad_heading_reports_the_row() {
        let csv = "name,x,y,heading,script\nCarA,0,0,N,F\nCarB,1,1,Q,F\n";
        let err = load_specs_reader(Cursor::new(csv)).unwrap_err();
        match err {
            RosterError::Parse(msg) => {
                assert!(msg.contains("row 2"), "got {msg:?}");
                assert!(msg.contains("CarB"), "got {msg:?}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_script_letter_is_rejected() {
        let csv = "name,x,y,heading,script\nCarA,0,0,N,FFX\n";
        let err = load_specs_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn non_integer_coordinate_is_rejected() {
        let csv = "name,x,y,heading,script\nCarA,two,0,N,F\n";
        let err = load_specs_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn out_of_bounds_coordinates_load_fine() {
        // Placement is the sim builder's contract, not the loader's.
        let csv = "name,x,y,heading,script\nCarA,99,-3,N,F\n";
        let specs = load_specs_reader(Cursor::new(csv)).unwrap();
        assert_eq!(specs[0].position, Position::new(99, -3));
    }
}
