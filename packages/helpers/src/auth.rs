use cosmwasm_std::{Addr, StdError, Storage};
use thiserror::Error;

/// Raised when an action is not signed by the principal it names.
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("missing required authority {name}")]
    MissingAuthority { name: String },

    #[error("{0}")]
    Std(#[from] StdError),
}

pub fn require_auth(sender: &Addr, required: &Addr) -> Result<(), AuthError> {
    if sender != required {
        return Err(AuthError::MissingAuthority {
            name: required.to_string(),
        });
    }
    Ok(())
}

/// Admin actions are authorized by the contract owner. A contract without an
/// owner can not be administered at all.
pub fn require_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), AuthError> {
    let ownership = cw_ownable::get_ownership(storage)?;
    match ownership.owner {
        Some(owner) => require_auth(sender, &owner),
        None => Err(AuthError::MissingAuthority {
            name: "owner".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, MockApi};

    #[test]
    fn require_auth_names_the_principal() {
        let err = require_auth(&Addr::unchecked("bob"), &Addr::unchecked("alice")).unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingAuthority {
                name: "alice".to_string()
            }
        );
        assert_eq!(err.to_string(), "missing required authority alice");
        require_auth(&Addr::unchecked("alice"), &Addr::unchecked("alice")).unwrap();
    }

    #[test]
    fn require_owner_checks_cw_ownable_owner() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        cw_ownable::initialize_owner(deps.as_mut().storage, &api, Some("admin")).unwrap();

        require_owner(deps.as_ref().storage, &Addr::unchecked("admin")).unwrap();
        let err = require_owner(deps.as_ref().storage, &Addr::unchecked("alice")).unwrap_err();
        assert_eq!(err.to_string(), "missing required authority admin");
    }
}
