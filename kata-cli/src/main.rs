//! Kata CLI - run any exercise from the command line
//!
//! Usage:
//!   kata fizzbuzz 15                     Classify a number
//!   kata luhn 79927398713                Validate a card number
//!   kata radix 365 3                     Convert to another base
//!   kata overlap '{"top":0,"left":0,"width":10,"height":10}' \
//!                '{"top":5,"left":5,"width":20,"height":20}'
//!   kata tictactoe '[["X",null,"0"],[null,"X","0"],[null,null,"X"]]'
//!   kata selector element=a attr='href$=".png"' pseudo-class=focus
//!
//! Structured arguments (rectangles, circles, points, matrices, boards) are
//! JSON.

mod selector;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata_common::warning::{set_color_enabled, warn_once};
use kata_loops::{Circle, Mark, Point, Rect};
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "kata", version, about = "Run the kata exercises from the command line")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a number as Fizz, Buzz, both, or itself
    Fizzbuzz {
        /// Number to classify
        #[arg(allow_negative_numbers = true)]
        num: i64,
    },
    /// Compute n!
    Factorial {
        /// Non-negative integer
        n: u32,
    },
    /// Sum every integer between two bounds, inclusive
    Sum {
        /// First bound
        #[arg(allow_negative_numbers = true)]
        n1: i64,
        /// Second bound
        #[arg(allow_negative_numbers = true)]
        n2: i64,
    },
    /// Check whether three lengths form a triangle
    Triangle {
        /// First side
        first: f64,
        /// Second side
        second: f64,
        /// Third side
        third: f64,
    },
    /// Check whether two rectangles overlap
    Overlap {
        /// First rectangle as JSON {top,left,width,height}
        first: String,
        /// Second rectangle as JSON {top,left,width,height}
        second: String,
    },
    /// Check whether a point lies inside a circle
    Circle {
        /// Circle as JSON {center:{x,y},radius}
        circle: String,
        /// Point as JSON {x,y}
        point: String,
    },
    /// Find the first character that occurs exactly once
    FirstSingle {
        /// Text to scan
        text: String,
    },
    /// Format an interval, smaller bound first
    Interval {
        /// First bound
        #[arg(allow_negative_numbers = true)]
        from: f64,
        /// Second bound
        #[arg(allow_negative_numbers = true)]
        to: f64,
        /// Include the start of the interval
        #[arg(long)]
        start_included: bool,
        /// Include the end of the interval
        #[arg(long)]
        end_included: bool,
    },
    /// Reverse a string
    Reverse {
        /// Text to reverse
        text: String,
    },
    /// Reverse the digits of an integer
    ReverseInt {
        /// Non-negative integer
        num: u64,
    },
    /// Validate a number with the Luhn checksum
    Luhn {
        /// Digits to validate
        number: String,
    },
    /// Sum digits until one remains
    DigitalRoot {
        /// Non-negative integer
        num: u64,
    },
    /// Check that brackets are balanced
    Brackets {
        /// Brackets from (), [], {}, <>
        text: String,
    },
    /// Write a number in base 2 to 10
    Radix {
        /// Non-negative integer
        num: u64,
        /// Target base
        #[arg(value_parser = clap::value_parser!(u32).range(2..=10))]
        radix: u32,
    },
    /// Find the directory shared by every path
    CommonPath {
        /// File paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Multiply two matrices
    Matrix {
        /// Left matrix as a JSON array of rows
        left: String,
        /// Right matrix as a JSON array of rows
        right: String,
    },
    /// Report the winner of a tic-tac-toe position
    Tictactoe {
        /// Board as JSON rows of "X", "0" or null
        board: String,
    },
    /// Build a CSS selector from kind=value parts and combinators
    Selector {
        /// Parts such as element=div, id=main, class=x, attr=href,
        /// pseudo-class=hover, pseudo-element=after, or a combinator
        /// (' ', '>', '+', '~')
        #[arg(required = true, allow_hyphen_values = true)]
        parts: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;
    set_color_enabled(color);

    match run(cli.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            let message = format!("Error: {err:#}");
            if color {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{message}");
            }
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String> {
    let output = match command {
        Command::Fizzbuzz { num } => kata_loops::fizzbuzz(num).to_string(),
        Command::Factorial { n } => kata_loops::factorial(n)
            .with_context(|| format!("{n}! does not fit in 128 bits"))?
            .to_string(),
        Command::Sum { n1, n2 } => kata_loops::sum_between(n1, n2).to_string(),
        Command::Triangle {
            first,
            second,
            third,
        } => kata_loops::is_triangle(first, second, third).to_string(),
        Command::Overlap { first, second } => {
            let first: Rect = parse_json("first rectangle", &first)?;
            let second: Rect = parse_json("second rectangle", &second)?;
            kata_loops::do_rectangles_overlap(&first, &second).to_string()
        }
        Command::Circle { circle, point } => {
            let circle: Circle = parse_json("circle", &circle)?;
            let point: Point = parse_json("point", &point)?;
            kata_loops::is_inside_circle(&circle, &point).to_string()
        }
        Command::FirstSingle { text } => kata_loops::first_single_char(&text)
            .map_or_else(|| "null".to_string(), String::from),
        Command::Interval {
            from,
            to,
            start_included,
            end_included,
        } => kata_loops::interval_string(from, to, start_included, end_included),
        Command::Reverse { text } => kata_loops::reverse_string(&text),
        Command::ReverseInt { num } => kata_loops::reverse_integer(num)
            .with_context(|| format!("reversed digits of {num} do not fit in 64 bits"))?
            .to_string(),
        Command::Luhn { number } => {
            if !number.chars().all(|c| c.is_ascii_digit()) {
                warn_once("CLI", "Luhn input should contain only digits");
            }
            kata_loops::is_luhn_valid(&number).to_string()
        }
        Command::DigitalRoot { num } => kata_loops::digital_root(num).to_string(),
        Command::Brackets { text } => kata_loops::is_brackets_balanced(&text).to_string(),
        Command::Radix { num, radix } => kata_loops::to_radix_string(num, radix),
        Command::CommonPath { paths } => kata_loops::common_directory_path(&paths),
        Command::Matrix { left, right } => {
            let left: Vec<Vec<i64>> = parse_json("left matrix", &left)?;
            let right: Vec<Vec<i64>> = parse_json("right matrix", &right)?;
            serde_json::to_string(&kata_loops::matrix_product(&left, &right))?
        }
        Command::Tictactoe { board } => {
            let board: Vec<Vec<Option<Mark>>> = parse_json("board", &board)?;
            if board.iter().any(|row| row.len() != board.len()) {
                warn_once("CLI", "tic-tac-toe board is not square");
            }
            kata_loops::evaluate_position(&board)
                .map_or_else(|| "undefined".to_string(), |mark| mark.to_string())
        }
        Command::Selector { parts } => selector::build(&parts)?,
    };

    Ok(output)
}

fn parse_json<T: DeserializeOwned>(what: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).with_context(|| format!("invalid {what}: {text}"))
}
