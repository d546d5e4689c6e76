use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use chiton_paths::Selection;

#[derive(Debug, Parser)]
#[command(name = "chiton")]
#[command(about = "Find the lowest-risk route across a chiton risk map", long_about = None)]
pub struct CLIArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a risk map read from a file
    Solve {
        /// File of equal-length rows of digits 1-9
        input_path: PathBuf,

        /// Strategy for picking the next cell to settle
        #[arg(long, value_enum, default_value = "heap")]
        selection: SelectionArg,

        /// Which map to solve: 1 = as given, 2 = 5x5 tiled
        #[arg(long, value_enum, default_value = "both")]
        part: Part,

        /// Also report the number of cells on each route
        #[arg(long)]
        show_path: bool,
    },
    /// Compare both strategies on random maps
    CrossCheck {
        /// Number of random maps
        #[arg(long, default_value_t = 25)]
        count: usize,

        /// Largest width and height of a map
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..=1000))]
        max_size: i32,

        /// Seed for the map generator
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Binary min-heap (fast)
    Heap,
    /// Linear scan of every cell (reference)
    Linear,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Heap => Selection::BinaryHeap,
            SelectionArg::Linear => Selection::LinearScan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    Both,
}

impl Part {
    pub fn includes_one(self) -> bool {
        matches!(self, Part::One | Part::Both)
    }

    pub fn includes_two(self) -> bool {
        matches!(self, Part::Two | Part::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CLIArgs::command().debug_assert();
    }

    #[test]
    fn solve_defaults() {
        let args = CLIArgs::try_parse_from(["chiton", "solve", "map.txt"]).unwrap();
        match args.command {
            Command::Solve {
                input_path,
                selection,
                part,
                show_path,
            } => {
                assert_eq!(input_path, PathBuf::from("map.txt"));
                assert_eq!(Selection::from(selection), Selection::BinaryHeap);
                assert_eq!(part, Part::Both);
                assert!(!show_path);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn part_values() {
        let args =
            CLIArgs::try_parse_from(["chiton", "solve", "m", "--part", "2", "--selection", "linear"])
                .unwrap();
        let Command::Solve { part, selection, .. } = args.command else {
            panic!("expected solve");
        };
        assert!(!part.includes_one());
        assert!(part.includes_two());
        assert_eq!(Selection::from(selection), Selection::LinearScan);
    }

    #[test]
    fn max_size_is_bounded() {
        assert!(CLIArgs::try_parse_from(["chiton", "cross-check", "--max-size", "0"]).is_err());
    }
}
