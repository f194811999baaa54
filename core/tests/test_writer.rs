use chrono::NaiveDate;
use healthgraph_core::writer::{sort_chronologically, to_csv_string, write_csv, HEADER};
use healthgraph_core::{Calories, Distance, NormalizedWorkout};

fn row(label: &str, day: u32, hour: u32, calories: Calories) -> NormalizedWorkout {
    NormalizedWorkout {
        activity_label: label.into(),
        duration: 32.5,
        distance: Distance::Unrecorded,
        calories,
        start: NaiveDate::from_ymd_opt(2023, 4, day)
            .unwrap()
            .and_hms_opt(hour, 5, 9)
            .unwrap(),
    }
}

#[test]
fn header_is_fixed() {
    let csv = to_csv_string(&[]).unwrap();
    assert_eq!(csv, "workoutActivityType,duration,distance,calories,startDate\r\n");
    assert_eq!(HEADER.join(","), csv.trim_end());
}

#[test]
fn numbers_render_like_the_tracker_expects() {
    let mut w = row("Walking", 3, 7, Calories::Estimated(212));
    w.duration = 12.345;
    w.distance = Distance::Recorded(4100.0);
    let floor = row("Yoga", 4, 18, Calories::Floor(0.1));

    let csv = to_csv_string(&[w, floor]).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Walking,12.345,4100.0,212,2023-04-03 07:05:09");
    assert_eq!(lines[2], "Yoga,32.5,0,0.1,2023-04-04 18:05:09");
}

#[test]
fn labels_with_commas_are_quoted() {
    let csv = to_csv_string(&[row("Skiing, Nordic", 1, 9, Calories::Estimated(500))]).unwrap();
    assert!(csv.contains("\"Skiing, Nordic\",32.5,0,500,2023-04-01 09:05:09"));
}

#[test]
fn sort_is_stable_and_chronological() {
    let mut rows = vec![
        row("C", 9, 8, Calories::Estimated(1)),
        row("A", 2, 8, Calories::Estimated(1)),
        row("B", 9, 8, Calories::Estimated(1)),
    ];
    sort_chronologically(&mut rows);
    let order: Vec<&str> = rows.iter().map(|r| r.activity_label.as_str()).collect();
    assert_eq!(order, ["A", "C", "B"]);
}

#[test]
fn write_csv_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&[row("Rowing", 5, 6, Calories::Estimated(140))], &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.ends_with("Rowing,32.5,0,140,2023-04-05 06:05:09\r\n"));
}

#[test]
fn write_csv_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.csv");
    assert!(write_csv(&[], &path).is_err());
}
