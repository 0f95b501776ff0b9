// crates/shared/src/toolbelts/awards.rs
use anyhow::Result;

use crate::awards::{awards_report, goty_history_report};
use crate::register_toolbelt;
use crate::schemas::{int_arg, str_arg};

pub struct Awards;

impl Default for Awards {
    fn default() -> Self {
        Self
    }
}

register_toolbelt! {
    Awards {
        description: "The Game Awards winners, 2018 to 2025",
        tools: {
            "get_game_awards" => get_game_awards {
                description: "Look up The Game Awards winners for a year, optionally narrowed to one category such as 'Best RPG'.",
                params: [],
                optional: [
                    "year": "integer" => "Award year, 2018-2025 (default: 2025)",
                    "category": "string" => "Category name or part of one, e.g. 'Best RPG', or 'all' (default: all)"
                ]
            },
            "get_game_of_the_year_history" => get_game_of_the_year_history {
                description: "List every Game of the Year winner, newest first.",
                params: []
            }
        }
    }
}

impl Awards {
    fn get_game_awards(&self, args: &serde_json::Value) -> Result<String> {
        let year = int_arg(args, "year", 2025);
        let category = str_arg(args, "category", "all");
        Ok(awards_report(year, category))
    }

    fn get_game_of_the_year_history(&self, _args: &serde_json::Value) -> Result<String> {
        Ok(goty_history_report())
    }
}
