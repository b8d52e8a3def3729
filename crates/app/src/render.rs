//! Terminal rendering for the board, the legend, and per-tick analysis.

use fastbreak_core::{Board, CellKind, Pos, TurnAnalytics};

pub fn print_legend() {
    println!("LEGEND");
    println!("{}", "=".repeat(50));
    for (symbol, description) in [
        ("🏀 B", "ball carrier"),
        ("🔵 A", "attacker"),
        ("🔴 D", "defender"),
        ("🎯 R", "ring (target)"),
        ("  . ", "open floor"),
    ] {
        println!("{symbol} = {description}");
    }
}

/// `target` is supplied by the caller: after a goal the ring cell holds the
/// carrier, so it can no longer be derived from the board itself.
pub fn print_board(board: &Board, target: Option<Pos>) {
    for line in board_lines(board, target) {
        println!("{line}");
    }
}

/// The bordered grid with row/column indices. Kept as lines so tests can
/// look at the output without capturing stdout.
pub fn board_lines(board: &Board, target: Option<Pos>) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.height() + 3);

    let mut header = String::from("     ");
    for col in 0..board.width() {
        header.push_str(&format!("{col:3}"));
    }
    lines.push(header);
    lines.push(format!("     ┌{}┐", "─".repeat(board.width() * 3)));

    for row in 0..board.height() {
        let mut line = format!("  {row:2} │");
        for col in 0..board.width() {
            let pos = Pos { row: row as i32, col: col as i32 };
            let kind = board.cell_at(pos);
            if kind == CellKind::Empty {
                line.push_str(" . ");
            } else {
                line.push_str(symbol(kind, pos, target));
                line.push(' ');
            }
        }
        line.push('│');
        lines.push(line);
    }

    lines.push(format!("     └{}┘", "─".repeat(board.width() * 3)));
    lines
}

fn symbol(kind: CellKind, pos: Pos, target: Option<Pos>) -> &'static str {
    if Some(pos) == target && kind == CellKind::BallCarrier {
        return "🏆";
    }
    match kind {
        CellKind::Empty => ".",
        CellKind::Defender => "🔴",
        CellKind::Attacker => "🔵",
        CellKind::BallCarrier => "🏀",
        CellKind::Ring => "🎯",
    }
}

pub fn print_turn_analysis(analytics: &TurnAnalytics) {
    if analytics.attacker_costs.is_empty() {
        println!("No attack to analyze this tick.");
        return;
    }

    println!("\nPath cost to the target ring, tick {}:", analytics.tick);
    let mut ranked = analytics.attacker_costs.clone();
    ranked.sort_by_key(|&(_, cost)| cost);
    for (pos, cost) in ranked {
        let marker = if Some(pos) == analytics.pass_target { "🏀" } else { "🔵" };
        match cost.finite() {
            Some(value) => println!(
                "   {marker} row {}, col {}: cost {}",
                pos.row,
                pos.col,
                u64::from(value) + analytics.tick
            ),
            None => println!("   {marker} row {}, col {}: unreachable", pos.row, pos.col),
        }
    }

    println!("\n{}", analytics.pass_decision);
    println!("{}", "=".repeat(80));
}
