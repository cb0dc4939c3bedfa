//! Mutation operations

use chrono::{DateTime, Utc};
use serde_json::json;

use shared::client::PinLoginResponse;
use shared::graphql::GraphqlRequest;
use shared::models::{
    Bet, BetInput, Court, CourtInput, Game, GameInput, GameStatus, Session, SessionInput, Shuttle,
    ShuttleInput, User, UserInput, Winner,
};

use crate::{ClientResult, GraphqlClient};

impl GraphqlClient {
    /// Exchange a 4-digit PIN for a bearer token and minimal profile.
    ///
    /// The token is NOT attached to this client automatically; callers
    /// decide when to adopt it (see `set_token`).
    pub async fn login_with_pin(&self, pin: &str) -> ClientResult<PinLoginResponse> {
        let query = r#"
            mutation LoginWithPin($pin: String!) {
                loginWithPin(input: { pin: $pin }) {
                    token
                    user {
                        _id
                        name
                        username
                        role
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("LoginWithPin")
            .with_variables(json!({ "pin": pin }));
        self.execute_field(request, "loginWithPin").await
    }

    /// Invalidate the given token server-side.
    pub async fn logout(&self, token: &str) -> ClientResult<()> {
        let query = r#"
            mutation Logout($token: String!) {
                logout(token: $token) { _id }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("Logout")
            .with_variables(json!({ "token": token }));
        // The payload is the logged-out user; nothing to keep.
        let _: serde_json::Value = self.execute_field(request, "logout").await?;
        Ok(())
    }

    // ===== Users =====

    pub async fn create_user(&self, input: &UserInput) -> ClientResult<User> {
        let query = r#"
            mutation CreateUser($input: UserInput!) {
                createUser(input: $input) {
                    _id name username contact role active
                    sponsoredBy { _id name }
                    sponsors { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateUser")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createUser").await
    }

    pub async fn update_user(&self, id: &str, input: &UserInput) -> ClientResult<User> {
        let query = r#"
            mutation UpdateUser($id: ID!, $input: UserInput!) {
                updateUser(_id: $id, input: $input) {
                    _id name username contact role active
                    sponsoredBy { _id name }
                    sponsors { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateUser")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateUser").await
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        let query = "mutation DeleteUser($id: ID!) { deleteUser(_id: $id) { _id } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("DeleteUser")
            .with_variables(json!({ "id": id }));
        let _: serde_json::Value = self.execute_field(request, "deleteUser").await?;
        Ok(())
    }

    // ===== Courts =====

    pub async fn create_court(&self, input: &CourtInput) -> ClientResult<Court> {
        let query = r#"
            mutation CreateCourt($input: CourtInput!) {
                createCourt(input: $input) { _id name price active }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateCourt")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createCourt").await
    }

    pub async fn update_court(&self, id: &str, input: &CourtInput) -> ClientResult<Court> {
        let query = r#"
            mutation UpdateCourt($id: ID!, $input: CourtInput!) {
                updateCourt(_id: $id, input: $input) { _id name price active }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateCourt")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateCourt").await
    }

    pub async fn delete_court(&self, id: &str) -> ClientResult<()> {
        let query = "mutation DeleteCourt($id: ID!) { deleteCourt(_id: $id) { _id } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("DeleteCourt")
            .with_variables(json!({ "id": id }));
        let _: serde_json::Value = self.execute_field(request, "deleteCourt").await?;
        Ok(())
    }

    // ===== Shuttles =====

    pub async fn create_shuttle(&self, input: &ShuttleInput) -> ClientResult<Shuttle> {
        let query = r#"
            mutation CreateShuttle($input: ShuttleInput!) {
                createShuttle(input: $input) { _id name price active }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateShuttle")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createShuttle").await
    }

    pub async fn update_shuttle(&self, id: &str, input: &ShuttleInput) -> ClientResult<Shuttle> {
        let query = r#"
            mutation UpdateShuttle($id: ID!, $input: ShuttleInput!) {
                updateShuttle(_id: $id, input: $input) { _id name price active }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateShuttle")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateShuttle").await
    }

    pub async fn delete_shuttle(&self, id: &str) -> ClientResult<()> {
        let query = "mutation DeleteShuttle($id: ID!) { deleteShuttle(_id: $id) { _id } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("DeleteShuttle")
            .with_variables(json!({ "id": id }));
        let _: serde_json::Value = self.execute_field(request, "deleteShuttle").await?;
        Ok(())
    }

    // ===== Sessions =====

    pub async fn create_session(&self, input: &SessionInput) -> ClientResult<Session> {
        let query = r#"
            mutation CreateSession($input: SessionInput!) {
                createSession(input: $input) {
                    _id
                    start
                    end
                    availablePlayers { _id name }
                    court { _id name price active }
                    shuttle { _id name price active }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateSession")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createSession").await
    }

    pub async fn update_session(&self, id: &str, input: &SessionInput) -> ClientResult<Session> {
        let query = r#"
            mutation UpdateSession($id: ID!, $input: SessionInput!) {
                updateSession(_id: $id, input: $input) {
                    _id
                    start
                    end
                    availablePlayers { _id name }
                    court { _id name price active }
                    shuttle { _id name price active }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateSession")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateSession").await
    }

    pub async fn end_session(&self, id: &str) -> ClientResult<()> {
        let query = "mutation EndSession($id: ID!) { endSession(_id: $id) { _id } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("EndSession")
            .with_variables(json!({ "id": id }));
        let _: serde_json::Value = self.execute_field(request, "endSession").await?;
        Ok(())
    }

    /// Close or reopen a session; `end = None` reopens it.
    pub async fn toggle_session(
        &self,
        id: &str,
        end: Option<DateTime<Utc>>,
    ) -> ClientResult<Session> {
        let query = r#"
            mutation ToggleSession($id: ID!, $end: DateTime) {
                toggleSession(_id: $id, end: $end) { _id start end }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("ToggleSession")
            .with_variables(json!({ "id": id, "end": end }));
        self.execute_field(request, "toggleSession").await
    }

    pub async fn add_players_to_session(
        &self,
        session_id: &str,
        player_ids: &[String],
    ) -> ClientResult<Session> {
        let query = r#"
            mutation AddPlayersToSession($sessionId: ID!, $playerIds: [ID!]!) {
                addPlayersToSession(sessionId: $sessionId, playerIds: $playerIds) {
                    _id
                    availablePlayers { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("AddPlayersToSession")
            .with_variables(json!({ "sessionId": session_id, "playerIds": player_ids }));
        self.execute_field(request, "addPlayersToSession").await
    }

    pub async fn remove_players_from_session(
        &self,
        session_id: &str,
        player_ids: &[String],
    ) -> ClientResult<Session> {
        let query = r#"
            mutation RemovePlayersFromSession($sessionId: ID!, $playerIds: [ID!]!) {
                removePlayersFromSession(sessionId: $sessionId, playerIds: $playerIds) {
                    _id
                    availablePlayers { _id name }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("RemovePlayersFromSession")
            .with_variables(json!({ "sessionId": session_id, "playerIds": player_ids }));
        self.execute_field(request, "removePlayersFromSession").await
    }

    pub async fn add_court_to_session(
        &self,
        session_id: &str,
        court_id: &str,
    ) -> ClientResult<Session> {
        let query = r#"
            mutation AddCourtToSession($sessionId: ID!, $courtId: ID!) {
                addCourtToSession(sessionId: $sessionId, courtId: $courtId) {
                    _id
                    court { _id name price active }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("AddCourtToSession")
            .with_variables(json!({ "sessionId": session_id, "courtId": court_id }));
        self.execute_field(request, "addCourtToSession").await
    }

    // ===== Games =====

    pub async fn create_game(&self, input: &GameInput) -> ClientResult<Game> {
        let query = r#"
            mutation CreateGame($input: GameInput!) {
                createGame(input: $input) {
                    _id start end winner status active
                    A1 { _id name }
                    A2 { _id name }
                    B1 { _id name }
                    B2 { _id name }
                    court { _id name price active }
                    shuttlesUsed {
                        quantity
                        shuttle { _id name price active }
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateGame")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createGame").await
    }

    pub async fn update_game(&self, id: &str, input: &GameInput) -> ClientResult<Game> {
        let query = r#"
            mutation UpdateGame($id: ID!, $input: GameInput!) {
                updateGame(_id: $id, input: $input) {
                    _id start end winner status active
                    A1 { _id name }
                    A2 { _id name }
                    B1 { _id name }
                    B2 { _id name }
                    court { _id name price active }
                    shuttlesUsed {
                        quantity
                        shuttle { _id name price active }
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateGame")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateGame").await
    }

    /// Record the end of a game: sets `end`, flips status to completed
    /// and stores the winner when one was called, in one partial
    /// update. Fields not sent keep their stored values.
    pub async fn end_game(
        &self,
        id: &str,
        session_id: &str,
        end: DateTime<Utc>,
        winner: Option<Winner>,
    ) -> ClientResult<Game> {
        let query = r#"
            mutation EndGame($id: ID!, $input: GameInput!) {
                updateGame(_id: $id, input: $input) {
                    _id start end winner status active
                    A1 { _id name }
                    A2 { _id name }
                    B1 { _id name }
                    B2 { _id name }
                    court { _id name price active }
                    shuttlesUsed {
                        quantity
                        shuttle { _id name price active }
                    }
                }
            }
        "#;
        let mut input = json!({
            "session": session_id,
            "end": end,
            "status": GameStatus::Completed,
        });
        if let Some(winner) = winner {
            input["winner"] = json!(winner);
        }
        let request = GraphqlRequest::new(query)
            .with_operation_name("EndGame")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateGame").await
    }

    // ===== Bets =====

    pub async fn create_bet(&self, input: &BetInput) -> ClientResult<Bet> {
        let query = r#"
            mutation CreateBet($input: BetInput!) {
                createBet(input: $input) {
                    _id betType betAmount paid active
                    bettors {
                        bettorForA { _id name }
                        bettorForB { _id name }
                    }
                    game {
                        _id start end winner status active
                        A1 { _id name }
                        B1 { _id name }
                        court { _id name price active }
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("CreateBet")
            .with_variables(json!({ "input": input }));
        self.execute_field(request, "createBet").await
    }

    pub async fn update_bet(&self, id: &str, input: &BetInput) -> ClientResult<Bet> {
        let query = r#"
            mutation UpdateBet($id: ID!, $input: BetInput!) {
                updateBet(_id: $id, input: $input) {
                    _id betType betAmount paid active
                    bettors {
                        bettorForA { _id name }
                        bettorForB { _id name }
                    }
                    game {
                        _id start end winner status active
                        A1 { _id name }
                        B1 { _id name }
                        court { _id name price active }
                    }
                }
            }
        "#;
        let request = GraphqlRequest::new(query)
            .with_operation_name("UpdateBet")
            .with_variables(json!({ "id": id, "input": input }));
        self.execute_field(request, "updateBet").await
    }

    pub async fn delete_bet(&self, id: &str) -> ClientResult<()> {
        let query = "mutation DeleteBet($id: ID!) { deleteBet(_id: $id) { _id } }";
        let request = GraphqlRequest::new(query)
            .with_operation_name("DeleteBet")
            .with_variables(json!({ "id": id }));
        let _: serde_json::Value = self.execute_field(request, "deleteBet").await?;
        Ok(())
    }
}
