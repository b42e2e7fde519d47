//! Startup configuration, read from the environment exactly once.

use std::collections::HashMap;
use std::net::SocketAddr;

use chrono::NaiveDate;
use chrono_tz::Tz;
use lum_common::config::{env_map, get, parse};
use lum_common::types::Winner;

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub partner_a_name: String,
    pub partner_b_name: String,
    pub timezone: Tz,
    pub relationship_start: NaiveDate,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self::from_map(&env_map())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let port: u16 = parse(vars, "PORT", 3000);
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            db_path: get(vars, "DB_PATH", "./data/app.db"),
            partner_a_name: get(vars, "PARTNER_A_NAME", "Nico"),
            partner_b_name: get(vars, "PARTNER_B_NAME", "Nena"),
            timezone: parse(vars, "TZ", chrono_tz::Europe::Berlin),
            relationship_start: parse(
                vars,
                "RELATIONSHIP_START_DATE",
                NaiveDate::from_ymd_opt(2021, 11, 12).expect("valid default start date"),
            ),
        }
    }

    /// Configured display name for a winner token.
    pub fn display_name(&self, winner: Winner) -> &str {
        match winner {
            Winner::Nico => &self.partner_a_name,
            Winner::Nena => &self.partner_b_name,
        }
    }
}
