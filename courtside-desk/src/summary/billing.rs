//! Session billing aggregation
//!
//! Totals over a session's closed games plus the per-player rate list
//! handed down by the server. Sponsor grouping keys on the explicit
//! `sponsoredBy` relation when present; the legacy display-name
//! convention (`"Bob (Alice)"` reads as sponsor Bob covering Alice) is
//! kept as fallback for records predating the relation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use shared::models::summary::{PlayerRate, ShuttleDetail};
use shared::models::Game;
use shared::util::{hours_between, round_to_nearest_5};

static NAME_CONVENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+)\)$").expect("valid regex literal"));

/// One player's line inside a sponsor group
#[derive(Debug, Clone, PartialEq)]
pub struct SponsorRow {
    pub label: String,
    pub games_played: u32,
    pub rate: Decimal,
}

/// All players billed to one sponsor, with the group subtotal
#[derive(Debug, Clone, PartialEq)]
pub struct SponsorGroup {
    pub sponsor: String,
    pub rows: Vec<SponsorRow>,
    pub subtotal: Decimal,
}

/// Session-level billing figures computed desk-side
#[derive(Debug, Clone)]
pub struct SessionBilling {
    pub court_total: Decimal,
    pub shuttle_total: Decimal,
    pub total_shuttles_used: u32,
    pub shuttle_details: Vec<ShuttleDetail>,
    pub player_total: Decimal,
    pub sponsor_groups: Vec<SponsorGroup>,
    /// Opaque adjustment from the external service, kept unrounded
    pub other_income: Decimal,
}

impl SessionBilling {
    /// Aggregate a session's games and player rates.
    pub fn compute(games: &[Game], player_rates: &[PlayerRate], other_income: Decimal) -> Self {
        let court_total = games
            .iter()
            .filter_map(|g| {
                let end = g.end?;
                Some(g.court.price * hours_between(g.start, end))
            })
            .sum();

        let mut shuttle_details: Vec<ShuttleDetail> = Vec::new();
        for usage in games.iter().flat_map(|g| &g.shuttles_used) {
            let line_price = usage.shuttle.price * Decimal::from(usage.quantity);
            match shuttle_details
                .iter_mut()
                .find(|d| d.shuttle_name == usage.shuttle.name)
            {
                Some(detail) => {
                    detail.quantity += usage.quantity;
                    detail.total_price += line_price;
                }
                None => shuttle_details.push(ShuttleDetail {
                    shuttle_name: usage.shuttle.name.clone(),
                    quantity: usage.quantity,
                    total_price: line_price,
                }),
            }
        }
        let shuttle_total = shuttle_details.iter().map(|d| d.total_price).sum();
        let total_shuttles_used = shuttle_details.iter().map(|d| d.quantity).sum();

        let player_total = player_rates.iter().map(|r| r.total_rate).sum();

        Self {
            court_total,
            shuttle_total,
            total_shuttles_used,
            shuttle_details,
            player_total,
            sponsor_groups: group_by_sponsor(player_rates),
            other_income,
        }
    }

    /// The adjustment figure as shown, rounded to the nearest 5.
    pub fn other_income_display(&self) -> Decimal {
        round_to_nearest_5(self.other_income)
    }

    /// Court + shuttle + other income.
    pub fn overall_total(&self) -> Decimal {
        self.court_total + self.shuttle_total + self.other_income
    }
}

/// Sponsor name and row label for one rate entry.
fn sponsor_and_label(rate: &PlayerRate) -> (String, String) {
    if let Some(sponsor) = &rate.sponsored_by {
        return (sponsor.name.clone(), rate.name.clone());
    }
    if let Some(caps) = NAME_CONVENTION.captures(rate.name.trim()) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    (rate.name.clone(), rate.name.clone())
}

fn group_by_sponsor(player_rates: &[PlayerRate]) -> Vec<SponsorGroup> {
    let mut groups: BTreeMap<String, SponsorGroup> = BTreeMap::new();
    for rate in player_rates {
        let (sponsor, label) = sponsor_and_label(rate);
        let group = groups
            .entry(sponsor.clone())
            .or_insert_with(|| SponsorGroup {
                sponsor,
                rows: Vec::new(),
                subtotal: Decimal::ZERO,
            });
        group.subtotal += rate.total_rate;
        group.rows.push(SponsorRow {
            label,
            games_played: rate.games_played,
            rate: rate.total_rate,
        });
    }
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::game::ShuttleUsage;
    use shared::models::{Court, GameStatus, Shuttle, UserRef};

    fn court(price: i64) -> Court {
        Court {
            id: "c1".into(),
            name: "Court 1".into(),
            price: Decimal::new(price, 0),
            active: true,
        }
    }

    fn shuttle(name: &str, price: Decimal) -> Shuttle {
        Shuttle {
            id: format!("sh-{name}"),
            name: name.into(),
            price,
            active: true,
        }
    }

    fn player(id: &str) -> UserRef {
        UserRef {
            id: id.into(),
            name: id.to_uppercase(),
        }
    }

    fn game(minutes: Option<i64>, court_price: i64, shuttles: Vec<ShuttleUsage>) -> Game {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        Game {
            id: "g1".into(),
            start,
            end: minutes.map(|m| start + chrono::Duration::minutes(m)),
            a1: player("p1"),
            a2: None,
            b1: player("p2"),
            b2: None,
            court: court(court_price),
            shuttles_used: shuttles,
            winner: None,
            status: GameStatus::Completed,
            active: true,
        }
    }

    fn rate(name: &str, amount: i64, sponsored_by: Option<&str>) -> PlayerRate {
        PlayerRate {
            id: name.to_lowercase(),
            games_played: 1,
            name: name.into(),
            total_rate: Decimal::new(amount, 0),
            sponsored_by: sponsored_by.map(|s| UserRef {
                id: s.to_lowercase(),
                name: s.into(),
            }),
        }
    }

    #[test]
    fn court_total_sums_price_times_hours_over_closed_games() {
        let games = vec![
            game(Some(60), 200, vec![]),
            game(Some(30), 200, vec![]),
            game(None, 200, vec![]), // still open, contributes nothing
        ];
        let billing = SessionBilling::compute(&games, &[], Decimal::ZERO);
        assert_eq!(billing.court_total, Decimal::new(300, 0));
    }

    #[test]
    fn shuttle_total_is_order_independent() {
        let a50 = shuttle("AS-50", Decimal::new(12, 0));
        let a30 = shuttle("AS-30", Decimal::new(8, 0));
        let forward = vec![
            game(
                Some(60),
                200,
                vec![
                    ShuttleUsage {
                        shuttle: a50.clone(),
                        quantity: 2,
                    },
                    ShuttleUsage {
                        shuttle: a30.clone(),
                        quantity: 1,
                    },
                ],
            ),
            game(
                Some(30),
                200,
                vec![ShuttleUsage {
                    shuttle: a50.clone(),
                    quantity: 3,
                }],
            ),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let one = SessionBilling::compute(&forward, &[], Decimal::ZERO);
        let two = SessionBilling::compute(&reversed, &[], Decimal::ZERO);

        // 5 * 12 + 1 * 8
        assert_eq!(one.shuttle_total, Decimal::new(68, 0));
        assert_eq!(two.shuttle_total, one.shuttle_total);
        assert_eq!(one.total_shuttles_used, 6);
        assert_eq!(two.total_shuttles_used, one.total_shuttles_used);
    }

    #[test]
    fn shuttle_details_merge_by_name() {
        let a50 = shuttle("AS-50", Decimal::new(12, 0));
        let games = vec![
            game(
                Some(60),
                200,
                vec![ShuttleUsage {
                    shuttle: a50.clone(),
                    quantity: 2,
                }],
            ),
            game(
                Some(60),
                200,
                vec![ShuttleUsage {
                    shuttle: a50,
                    quantity: 1,
                }],
            ),
        ];
        let billing = SessionBilling::compute(&games, &[], Decimal::ZERO);
        assert_eq!(billing.shuttle_details.len(), 1);
        assert_eq!(billing.shuttle_details[0].quantity, 3);
        assert_eq!(billing.shuttle_details[0].total_price, Decimal::new(36, 0));
    }

    #[test]
    fn name_convention_groups_under_sponsor() {
        let rates = vec![rate("Bob", 100, None), rate("Bob (Alice)", 60, None)];
        let billing = SessionBilling::compute(&[], &rates, Decimal::ZERO);

        assert_eq!(billing.sponsor_groups.len(), 1);
        let group = &billing.sponsor_groups[0];
        assert_eq!(group.sponsor, "Bob");
        assert_eq!(group.subtotal, Decimal::new(160, 0));
        let labels: Vec<&str> = group.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Bob", "Alice"]);
    }

    #[test]
    fn explicit_relation_takes_precedence_over_name_parsing() {
        // The display name suggests Carol, the relation says Bob.
        let rates = vec![rate("Carol (Dave)", 40, Some("Bob"))];
        let billing = SessionBilling::compute(&[], &rates, Decimal::ZERO);
        assert_eq!(billing.sponsor_groups[0].sponsor, "Bob");
        assert_eq!(billing.sponsor_groups[0].rows[0].label, "Carol (Dave)");
    }

    #[test]
    fn groups_sort_by_sponsor_name() {
        let rates = vec![rate("Zed", 10, None), rate("Ann", 20, None)];
        let billing = SessionBilling::compute(&[], &rates, Decimal::ZERO);
        let sponsors: Vec<&str> = billing
            .sponsor_groups
            .iter()
            .map(|g| g.sponsor.as_str())
            .collect();
        assert_eq!(sponsors, vec!["Ann", "Zed"]);
    }

    #[test]
    fn other_income_displays_rounded_to_nearest_5() {
        let billing = SessionBilling::compute(&[], &[], Decimal::new(125, 1)); // 12.5
        assert_eq!(billing.other_income_display(), Decimal::new(15, 0));
        assert_eq!(billing.other_income, Decimal::new(125, 1));
    }

    #[test]
    fn overall_total_adds_the_three_figures() {
        let games = vec![game(Some(60), 200, vec![])];
        let billing = SessionBilling::compute(&games, &[], Decimal::new(20, 0));
        assert_eq!(billing.overall_total(), Decimal::new(220, 0));
    }

    #[test]
    fn player_total_sums_server_rates() {
        let rates = vec![rate("Bob", 100, None), rate("Ann", 55, None)];
        let billing = SessionBilling::compute(&[], &rates, Decimal::ZERO);
        assert_eq!(billing.player_total, Decimal::new(155, 0));
    }
}
