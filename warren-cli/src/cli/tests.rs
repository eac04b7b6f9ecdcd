//! Tests for the CLI command pipeline and the renderer.

use rstest::rstest;

use warren_maze::MazeError;

use super::{CarveCommand, CarveSummary, Cli, CliError, Command, render_summary, run_cli};

fn carve_cli(rows: usize, cols: usize, seed: u64, solve: bool) -> Cli {
    Cli {
        command: Command::Carve(CarveCommand {
            rows,
            cols,
            seed: Some(seed),
            solve,
        }),
    }
}

fn render_to_string(summary: &CarveSummary) -> String {
    let mut rendered = Vec::new();
    render_summary(summary, &mut rendered).expect("writing to a Vec cannot fail");
    String::from_utf8(rendered).expect("renderer emits ASCII")
}

#[test]
fn run_cli_carves_a_perfect_maze() {
    let summary = run_cli(carve_cli(4, 6, 3, false)).expect("carve must succeed");
    assert_eq!(summary.removed.len(), 4 * 6 - 1);
    assert!(summary.route.is_none());
}

#[test]
fn run_cli_solves_when_requested() {
    let summary = run_cli(carve_cli(5, 5, 9, true)).expect("carve must succeed");
    let route = summary.route.as_deref().expect("route was requested");
    assert_eq!(route.first().map(|room| (room.row(), room.col())), Some((0, 0)));
    assert_eq!(route.last().map(|room| (room.row(), room.col())), Some((4, 4)));
}

#[rstest]
#[case::no_rows(0, 4)]
#[case::no_cols(4, 0)]
fn run_cli_rejects_empty_dimensions(#[case] rows: usize, #[case] cols: usize) {
    let err = run_cli(carve_cli(rows, cols, 1, false)).expect_err("empty maze must fail");
    assert!(matches!(
        err,
        CliError::Maze(MazeError::EmptyMaze { .. })
    ));
}

#[test]
fn renderer_keeps_the_border_closed() {
    let summary = run_cli(carve_cli(3, 3, 17, false)).expect("carve must succeed");
    let rendered = render_to_string(&summary);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 2 * 3 + 1);
    assert_eq!(lines[0], "+---+---+---+");
    assert_eq!(lines[lines.len() - 1], "+---+---+---+");
    for line in lines.iter().skip(1).step_by(2) {
        assert!(line.starts_with('|'), "west border stays closed: {line}");
        assert!(line.ends_with('|'), "east border stays closed: {line}");
    }
}

#[test]
fn renderer_marks_every_route_room() {
    let summary = run_cli(carve_cli(4, 4, 29, true)).expect("carve must succeed");
    let route_len = summary.route.as_deref().expect("route was requested").len();
    let rendered = render_to_string(&summary);
    assert_eq!(rendered.matches('*').count(), route_len);
}

#[test]
fn seeded_runs_render_identically() {
    let first = render_to_string(&run_cli(carve_cli(6, 5, 101, true)).expect("carve"));
    let second = render_to_string(&run_cli(carve_cli(6, 5, 101, true)).expect("carve"));
    assert_eq!(first, second);
}
