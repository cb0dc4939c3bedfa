//! Query operations

use serde_json::json;

use shared::graphql::GraphqlRequest;
use shared::models::{Bet, Court, Game, Session, Shuttle, User};
use shared::models::summary::{GameSummary, SessionBetsSummary, SessionSummary};

use crate::{ClientResult, GraphqlClient};

const GAME_FIELDS: &str = r#"
    _id
    start
    end
    winner
    status
    active
    A1 { _id name }
    A2 { _id name }
    B1 { _id name }
    B2 { _id name }
    court { _id name price active }
    shuttlesUsed {
        quantity
        shuttle { _id name price active }
    }
"#;

fn session_fields() -> String {
    format!(
        r#"
        _id
        start
        end
        createdAt
        updatedAt
        availablePlayers {{ _id name }}
        court {{ _id name price active }}
        shuttle {{ _id name price active }}
        games {{ {game} }}
        "#,
        game = GAME_FIELDS
    )
}

fn bet_fields() -> String {
    format!(
        r#"
        _id
        betType
        betAmount
        paid
        active
        bettors {{
            bettorForA {{ _id name }}
            bettorForB {{ _id name }}
        }}
        game {{ {game} }}
        "#,
        game = GAME_FIELDS
    )
}

impl GraphqlClient {
    /// Most recent sessions, newest first.
    pub async fn fetch_sessions(&self, limit: i64) -> ClientResult<Vec<Session>> {
        let query = format!(
            "query FetchSessions($limit: Int!) {{ fetchSessions(limit: $limit) {{ {} }} }}",
            session_fields()
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchSessions")
            .with_variables(json!({ "limit": limit }));
        self.execute_field(request, "fetchSessions").await
    }

    pub async fn fetch_session(&self, id: &str) -> ClientResult<Option<Session>> {
        let query = format!(
            "query FetchSession($id: ID!) {{ fetchSession(_id: $id) {{ {} }} }}",
            session_fields()
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchSession")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchSession").await
    }

    pub async fn fetch_games_by_session(&self, session_id: &str) -> ClientResult<Vec<Game>> {
        let query = format!(
            "query FetchGamesBySession($session: ID!) {{ fetchGamesBySession(session: $session) {{ {} }} }}",
            GAME_FIELDS
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchGamesBySession")
            .with_variables(json!({ "session": session_id }));
        self.execute_field(request, "fetchGamesBySession").await
    }

    pub async fn fetch_game(&self, id: &str) -> ClientResult<Option<Game>> {
        let query = format!(
            "query FetchGame($id: ID!) {{ fetchGame(_id: $id) {{ {} }} }}",
            GAME_FIELDS
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchGame")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchGame").await
    }

    pub async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        let query = r#"
            query FetchUsers {
                fetchUsers {
                    _id
                    name
                    username
                    contact
                    role
                    active
                    sponsoredBy { _id name }
                    sponsors { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query).with_operation_name("FetchUsers");
        self.execute_field(request, "fetchUsers").await
    }

    pub async fn fetch_user(&self, id: &str) -> ClientResult<Option<User>> {
        let query = r#"
            query FetchUser($id: ID!) {
                fetchUser(_id: $id) {
                    _id
                    name
                    username
                    contact
                    role
                    active
                    sponsoredBy { _id name }
                    sponsors { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchUser")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchUser").await
    }

    pub async fn fetch_courts(&self) -> ClientResult<Vec<Court>> {
        let query = "query FetchCourts { fetchCourts { _id name price active } }";
        let request = GraphqlRequest::new(query).with_operation_name("FetchCourts");
        self.execute_field(request, "fetchCourts").await
    }

    pub async fn fetch_court(&self, id: &str) -> ClientResult<Option<Court>> {
        let query = "query FetchCourt($id: ID!) { fetchCourt(_id: $id) { _id name price active } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchCourt")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchCourt").await
    }

    pub async fn fetch_shuttles(&self) -> ClientResult<Vec<Shuttle>> {
        let query = "query FetchShuttles { fetchShuttles { _id name price active } }";
        let request = GraphqlRequest::new(query).with_operation_name("FetchShuttles");
        self.execute_field(request, "fetchShuttles").await
    }

    pub async fn fetch_shuttle(&self, id: &str) -> ClientResult<Option<Shuttle>> {
        let query =
            "query FetchShuttle($id: ID!) { fetchShuttle(_id: $id) { _id name price active } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchShuttle")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchShuttle").await
    }

    pub async fn fetch_bet(&self, id: &str) -> ClientResult<Option<Bet>> {
        let query = format!(
            "query FetchBet($id: ID!) {{ fetchBet(_id: $id) {{ {} }} }}",
            bet_fields()
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchBet")
            .with_variables(json!({ "id": id }));
        self.execute_optional_field(request, "fetchBet").await
    }

    pub async fn fetch_bets_by_game(&self, game_id: &str) -> ClientResult<Vec<Bet>> {
        let query = format!(
            "query FetchBetsByGame($game: ID!) {{ fetchBetsByGame(game: $game) {{ {} }} }}",
            bet_fields()
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchBetsByGame")
            .with_variables(json!({ "game": game_id }));
        self.execute_field(request, "fetchBetsByGame").await
    }

    pub async fn fetch_bets_by_session(&self, session_id: &str) -> ClientResult<Vec<Bet>> {
        let query = format!(
            "query FetchBetsBySession($session: ID!) {{ fetchBetsBySession(session: $session) {{ {} }} }}",
            bet_fields()
        );
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchBetsBySession")
            .with_variables(json!({ "session": session_id }));
        self.execute_field(request, "fetchBetsBySession").await
    }

    /// Server-derived session billing rollup.
    pub async fn fetch_session_summary(&self, id: &str) -> ClientResult<SessionSummary> {
        let query = r#"
            query FetchSessionSummary($id: ID!) {
                fetchSessionSummary(_id: $id) {
                    totalShuttlesUsed
                    shuttleTotal
                    courtTotal
                    otherIncome
                    playerTotal
                    shuttleDetails {
                        shuttleName
                        quantity
                        totalPrice
                    }
                    playerSummaryRates {
                        _id
                        game
                        name
                        totalRate
                        sponsoredBy { _id name }
                    }
                    durationPerCourt {
                        totalDuration
                        court { _id name price active }
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchSessionSummary")
            .with_variables(json!({ "id": id }));
        self.execute_field(request, "fetchSessionSummary").await
    }

    /// Server-derived per-game cost breakdown.
    pub async fn fetch_game_summary(&self, id: &str) -> ClientResult<GameSummary> {
        let query = r#"
            query FetchGameSummary($id: ID!) {
                fetchGameSummary(_id: $id) {
                    courtRate
                    courtRatePerPlayer
                    shuttleRate
                    shuttleRatePerPlayer
                    totalRate
                    totalRatePerPlayer
                    players { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchGameSummary")
            .with_variables(json!({ "id": id }));
        self.execute_field(request, "fetchGameSummary").await
    }

    /// Server-derived bet tally, optionally filtered by exact bet type.
    pub async fn fetch_session_bets_summary(
        &self,
        id: &str,
        bet_type: Option<&str>,
    ) -> ClientResult<SessionBetsSummary> {
        let query = r#"
            query FetchSessionBetsSummary($id: ID!, $betType: String) {
                fetchSessionBetsSummary(_id: $id, betType: $betType) {
                    session { _id start end }
                    playerStats {
                        user { _id name }
                        wins
                        losses
                        total
                        competitors {
                            user { _id name }
                            wins
                            losses
                            total
                        }
                    }
                    totalBets
                    totalAmount
                    totalWins
                    totalLosses
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchSessionBetsSummary")
            .with_variables(json!({ "id": id, "betType": bet_type }));
        self.execute_field(request, "fetchSessionBetsSummary").await
    }

    /// Distinct bet-type labels used within a session.
    pub async fn fetch_distinct_bet_types(&self, session_id: &str) -> ClientResult<Vec<String>> {
        let query = r#"
            query FetchDistinctBetTypes($sessionId: ID!) {
                fetchDistinctBetTypes(sessionId: $sessionId)
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("FetchDistinctBetTypes")
            .with_variables(json!({ "sessionId": session_id }));
        self.execute_field(request, "fetchDistinctBetTypes").await
    }
}
