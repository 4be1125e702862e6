use cfl_types::{AccountId, BlockHeight, CampaignType, Currency};

use crate::config::LedgerConfig;
use crate::error::CreateError;
use crate::records::{
    CreateCampaignRequest, DESCRIPTION_MAX_LEN, LOCATION_MAX_LEN, NAME_MAX_LEN,
};
use crate::state::LedgerState;

/// Run the creation validation chain and parse the enumerated fields.
///
/// The check order is part of the observable contract: the first failing
/// check decides the returned error code, so hosts comparing codes see the
/// same behavior as the reference. In particular the authority check comes
/// last — a request that is invalid for any other reason reports that
/// reason even when no authority is set.
pub(crate) fn validate_create(
    state: &LedgerState,
    config: &LedgerConfig,
    caller: &AccountId,
    now: BlockHeight,
    request: &CreateCampaignRequest,
) -> Result<(CampaignType, Currency), CreateError> {
    if state.next_campaign_id >= config.max_campaigns {
        return Err(CreateError::MaxCampaignsExceeded);
    }
    if !text_in_bounds(&request.name, NAME_MAX_LEN) {
        return Err(CreateError::InvalidName);
    }
    if request.goal == 0 {
        return Err(CreateError::InvalidGoal);
    }
    if request.deadline <= now {
        return Err(CreateError::InvalidDeadline);
    }
    if request.min_contrib == 0 {
        return Err(CreateError::InvalidMinContrib);
    }
    // min/max relative ordering is deliberately not cross-checked; each
    // bound is only required to be positive.
    if request.max_contrib == 0 {
        return Err(CreateError::InvalidMaxContrib);
    }
    let campaign_type = CampaignType::parse(&request.campaign_type)
        .map_err(|_| CreateError::InvalidCampaignType)?;
    if request.recipient == *caller {
        return Err(CreateError::InvalidRecipient);
    }
    if !text_in_bounds(&request.description, DESCRIPTION_MAX_LEN) {
        return Err(CreateError::InvalidDescription);
    }
    if !text_in_bounds(&request.location, LOCATION_MAX_LEN) {
        return Err(CreateError::InvalidLocation);
    }
    let currency =
        Currency::parse(&request.currency).map_err(|_| CreateError::InvalidCurrency)?;
    if state.by_name.contains_key(&request.name) {
        return Err(CreateError::CampaignAlreadyExists);
    }
    if state.authority.is_none() {
        return Err(CreateError::AuthorityNotVerified);
    }

    Ok((campaign_type, currency))
}

/// Non-empty and at most `max` characters.
pub(crate) fn text_in_bounds(text: &str, max: usize) -> bool {
    !text.is_empty() && text.chars().count() <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: "Alpha".into(),
            goal: 1000,
            deadline: BlockHeight::new(100),
            min_contrib: 10,
            max_contrib: 500,
            campaign_type: "charity".into(),
            recipient: AccountId::named("recipient"),
            description: "Help the needy".into(),
            location: "CityX".into(),
            currency: "STX".into(),
        }
    }

    fn state_with_authority() -> LedgerState {
        let mut state = LedgerState::new(1000);
        state.authority = Some(AccountId::named("authority"));
        state
    }

    fn check(state: &LedgerState, request: &CreateCampaignRequest) -> Result<(), CreateError> {
        validate_create(
            state,
            &LedgerConfig::default(),
            &AccountId::named("caller"),
            BlockHeight::zero(),
            request,
        )
        .map(|_| ())
    }

    #[test]
    fn valid_request_passes_and_parses_enums() {
        let state = state_with_authority();
        let (ty, currency) = validate_create(
            &state,
            &LedgerConfig::default(),
            &AccountId::named("caller"),
            BlockHeight::zero(),
            &request(),
        )
        .unwrap();
        assert_eq!(ty, CampaignType::Charity);
        assert_eq!(currency, Currency::Stx);
    }

    #[test]
    fn each_check_fails_with_its_own_code() {
        let state = state_with_authority();

        let mut r = request();
        r.name = String::new();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidName));

        let mut r = request();
        r.name = "n".repeat(NAME_MAX_LEN + 1);
        assert_eq!(check(&state, &r), Err(CreateError::InvalidName));

        let mut r = request();
        r.goal = 0;
        assert_eq!(check(&state, &r), Err(CreateError::InvalidGoal));

        let mut r = request();
        r.deadline = BlockHeight::zero();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidDeadline));

        let mut r = request();
        r.min_contrib = 0;
        assert_eq!(check(&state, &r), Err(CreateError::InvalidMinContrib));

        let mut r = request();
        r.max_contrib = 0;
        assert_eq!(check(&state, &r), Err(CreateError::InvalidMaxContrib));

        let mut r = request();
        r.campaign_type = "invalid".into();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidCampaignType));

        let mut r = request();
        r.recipient = AccountId::named("caller");
        assert_eq!(check(&state, &r), Err(CreateError::InvalidRecipient));

        let mut r = request();
        r.description = "d".repeat(DESCRIPTION_MAX_LEN + 1);
        assert_eq!(check(&state, &r), Err(CreateError::InvalidDescription));

        let mut r = request();
        r.location = String::new();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidLocation));

        let mut r = request();
        r.currency = "EUR".into();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidCurrency));
    }

    #[test]
    fn validation_order_is_significant() {
        // Both goal and deadline invalid: the goal check comes first.
        let state = state_with_authority();
        let mut r = request();
        r.goal = 0;
        r.deadline = BlockHeight::zero();
        assert_eq!(check(&state, &r), Err(CreateError::InvalidGoal));
    }

    #[test]
    fn missing_authority_is_checked_last() {
        let state = LedgerState::new(1000);
        assert_eq!(check(&state, &request()), Err(CreateError::AuthorityNotVerified));

        // An otherwise-invalid request reports its own error first.
        let mut r = request();
        r.goal = 0;
        assert_eq!(check(&state, &r), Err(CreateError::InvalidGoal));
    }

    #[test]
    fn ceiling_check_precedes_everything() {
        let mut state = LedgerState::new(1000);
        state.next_campaign_id = LedgerConfig::default().max_campaigns;
        let mut r = request();
        r.goal = 0;
        assert_eq!(check(&state, &r), Err(CreateError::MaxCampaignsExceeded));
    }

    #[test]
    fn bounds_are_counted_in_characters() {
        assert!(text_in_bounds(&"é".repeat(NAME_MAX_LEN), NAME_MAX_LEN));
        assert!(!text_in_bounds(&"é".repeat(NAME_MAX_LEN + 1), NAME_MAX_LEN));
        assert!(!text_in_bounds("", NAME_MAX_LEN));
    }

    #[test]
    fn min_max_ordering_is_not_cross_checked() {
        let state = state_with_authority();
        let mut r = request();
        r.min_contrib = 500;
        r.max_contrib = 10;
        assert!(check(&state, &r).is_ok());
    }
}
