//! Plain-text and JSON rendering.

use super::types::*;

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

impl EconomyReport {
    /// Generate a text report. Sections always appear in the same order.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      ECONOMY REPORT\n");
        report.push_str(&format!(
            "                      Levels {} - {}\n",
            self.first_level, self.last_level
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── LEVELING ─────────────────────────────────────────────────────\n");
        report.push_str("  Level    XP Req    Cumulative      HP       MP\n");
        report.push_str("  ─────    ──────    ──────────    ────    ─────\n");
        for row in &self.leveling {
            report.push_str(&format!(
                "  {:5}  {:8}  {:12}  {:6}  {:7.1}\n",
                row.level,
                row.experience_required,
                row.cumulative_experience,
                row.reference_hp,
                row.reference_mp
            ));
        }
        report.push('\n');

        report.push_str("── MONSTER REWARDS ──────────────────────────────────────────────\n");
        if let Some(first) = self.races.first() {
            report.push_str(&format!(
                "  {:<14} {:>7} {:>7} {:>10} {:>10}\n",
                "Race",
                "Base XP",
                "Gold",
                format!("Kills L{}", first.low_level),
                format!("Kills L{}", first.high_level)
            ));
        }
        for row in &self.races {
            report.push_str(&format!(
                "  {:<14} {:>7} {:>7} {:>10} {:>10}\n",
                row.race,
                row.base_experience,
                row.base_gold,
                row.kills_at_low_level,
                row.kills_at_high_level
            ));
        }
        report.push('\n');

        report.push_str("── DUNGEON REWARDS ──────────────────────────────────────────────\n");
        report.push_str("  Dungeon            Floors   Base XP/Gold    Ref Floor XP/Gold    Bonus   Clear XP/Gold\n");
        for row in &self.dungeons {
            report.push_str(&format!(
                "  {:<18} {:>6}   {:>6}/{:<6}  F{:<3} {:>7}/{:<7}  x{:<5.2}  {:>7}/{:<7}\n",
                row.id,
                row.floor_count,
                row.base.experience,
                row.base.gold,
                row.reference_floor,
                row.reward_at_reference.experience,
                row.reward_at_reference.gold,
                row.completion_bonus,
                row.completion_reward.experience,
                row.completion_reward.gold
            ));
        }
        report.push('\n');

        report.push_str("── ITEM PRICES ──────────────────────────────────────────────────\n");
        report.push_str("  Grade        Count    Mean Price\n");
        for stats in &self.item_prices {
            report.push_str(&format!(
                "  {:<10} {:>7}    {:>10}\n",
                stats.grade.name(),
                stats.count,
                fmt_opt(stats.mean_price, 1)
            ));
        }
        report.push('\n');

        self.push_cross_check(&mut report);
        self.push_verification(&mut report);

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report
    }

    fn push_cross_check(&self, report: &mut String) {
        let check = &self.cross_check;
        report.push_str("── ECONOMY CROSS-CHECK ──────────────────────────────────────────\n");
        report.push_str(&format!("  Reference race: {}\n\n", check.reference_race));

        if !check.races.is_empty() {
            report.push_str("  Kills to level up\n");
            report.push_str("  Level");
            for race in &check.races {
                report.push_str(&format!(" {:>10}", race));
            }
            report.push('\n');
            for row in &check.pacing {
                report.push_str(&format!("  {:5}", row.level));
                for kills in &row.kills {
                    report.push_str(&format!(" {:>10}", kills));
                }
                report.push('\n');
            }
            report.push('\n');
        }

        if let Some(gear) = &check.gear_cost {
            report.push_str("  Gold income vs gear cost\n");
            report.push_str(&format!("    Gold per kill:        {}\n", gear.gold_per_kill));
            report.push_str(&format!(
                "    Common item:          {} gold = {} kills\n",
                fmt_opt(gear.common_mean_price, 1),
                fmt_opt(gear.common_cost_in_kills, 1)
            ));
            report.push_str(&format!(
                "    Rare item:            {} gold = {} kills\n\n",
                fmt_opt(gear.rare_mean_price, 1),
                fmt_opt(gear.rare_cost_in_kills, 1)
            ));
        }

        report.push_str("  Enhancement cost\n");
        report.push_str("    Tier       Cost    Cumulative\n");
        for step in &check.enhancement {
            report.push_str(&format!(
                "    {:4} {:10} {:13}\n",
                step.tier, step.cost, step.cumulative_cost
            ));
        }
        report.push('\n');
    }

    fn push_verification(&self, report: &mut String) {
        report.push_str("── VERIFICATION ─────────────────────────────────────────────────\n");
        let verdict = if self.verification.passed {
            "PASS"
        } else {
            "FAIL"
        };
        report.push_str(&format!("  Result: {}\n", verdict));

        for finding in &self.verification.findings {
            let marker = match finding.severity {
                Severity::Warning => "⚠️ ",
                Severity::Failure => "❌",
            };
            report.push_str(&format!(
                "  {} {}: {}\n",
                marker, finding.subject, finding.message
            ));
        }

        if !self.failures.is_empty() {
            report.push_str("\n  Skipped records:\n");
            for failure in &self.failures {
                report.push_str(&format!("    - {}\n", failure));
            }
        }
        report.push('\n');
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
