//! One-shot board dump for scripts and terminals without the
//! interactive UI.

use anyhow::Result;
use colored::Colorize;

use crate::api::position::PositionBoardData;
use crate::board::BoardState;
use crate::tui::score_dots;

/// Print the partitioned board to stdout and exit.
pub fn execute(data: PositionBoardData) -> Result<()> {
    let position_name = data.position_name.clone();
    let board = BoardState::new(data.steps, data.candidates);
    let grouped = board.grouped();

    println!("{}", crate::LOGO);
    println!();
    println!("{}", position_name.bold());
    println!();

    for step in board.steps() {
        let cards = grouped.get(&step.name).map(Vec::as_slice).unwrap_or(&[]);
        println!(
            "{} {}",
            format!("{}:", step.name).cyan().bold(),
            format!("({})", cards.len()).dimmed()
        );

        if cards.is_empty() {
            println!("  {}", "(no candidates)".dimmed());
        }
        for card in cards {
            println!(
                "  {} {}",
                card.full_name,
                score_dots(card.average_score).green()
            );
        }
        println!();
    }

    Ok(())
}
