use cosmwasm_std::{
    attr, from_json,
    testing::{mock_dependencies, mock_env, mock_info},
    Addr, Event,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use vaulta_base::{
    asset::Asset,
    error::mockreceiver::ContractError,
    msg::{
        mockreceiver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
        notification::TransferNotification,
        tokens as tokens_msg,
    },
    state::mockreceiver::Config,
};

use crate::contract::{execute, instantiate, migrate, query};

const ADMIN: &str = "admin";
const SENDER: &str = "alice";
const DESTINATION: &str = "bob";

fn asset(s: &str) -> Asset {
    s.parse().unwrap()
}

#[test]
fn config_is_admin_only() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        InstantiateMsg {
            owner: ADMIN.to_string(),
        },
    )
    .unwrap();
    let config: Option<Config> =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
    assert_eq!(config, None);

    let set_config = ExecuteMsg::SetConfig {
        tokencontract: "ledger".to_string(),
        sender: SENDER.to_string(),
        destination: DESTINATION.to_string(),
    };
    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(SENDER, &[]),
        set_config.clone(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "missing required authority admin");

    let res = execute(deps.as_mut(), mock_env(), mock_info(ADMIN, &[]), set_config).unwrap();
    assert_eq!(
        res.events,
        vec![
            Event::new("crates.io:vaulta__vaulta-mockreceiver-execute-set-config").add_attributes(
                vec![
                    attr("tokencontract", "ledger"),
                    attr("sender", SENDER),
                    attr("destination", DESTINATION),
                ]
            )
        ]
    );
    let config: Option<Config> =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
    assert_eq!(
        config,
        Some(Config {
            tokencontract: Addr::unchecked("ledger"),
            sender: Addr::unchecked(SENDER),
            destination: Addr::unchecked(DESTINATION),
        })
    );

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        ExecuteMsg::Reset {},
    )
    .unwrap();
    let config: Option<Config> =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
    assert_eq!(config, None);
}

#[test]
fn notification_before_config() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        InstantiateMsg {
            owner: ADMIN.to_string(),
        },
    )
    .unwrap();
    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("ledger", &[]),
        ExecuteMsg::OnTransfer(TransferNotification {
            from: SENDER.to_string(),
            to: mock_env().contract.address.to_string(),
            quantity: asset("1.0000 FOO"),
            memo: String::new(),
        }),
    )
    .unwrap_err();
    assert_eq!(err, ContractError::NotConfigured {});

    // transfers that do not credit the relay are not its business
    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("ledger", &[]),
        ExecuteMsg::OnTransfer(TransferNotification {
            from: SENDER.to_string(),
            to: DESTINATION.to_string(),
            quantity: asset("1.0000 FOO"),
            memo: String::new(),
        }),
    )
    .unwrap();
    assert!(res.messages.is_empty());
}

#[test]
fn test_migrate_wrong_contract() {
    let mut deps = mock_dependencies();
    cw2::set_contract_version(deps.as_mut().storage, "wrong_contract_name", "0.0.1").unwrap();
    let res = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
    assert_eq!(
        res,
        ContractError::MigrationError {
            storage_contract_name: "wrong_contract_name".to_string(),
            contract_name: crate::contract::CONTRACT_NAME.to_string()
        }
    )
}

/// Two `FOO` ledgers, the relay configured for the first one and alice
/// holding `100.0000 FOO` on both.
struct Relay {
    app: App,
    ledger: Addr,
    other_ledger: Addr,
    receiver: Addr,
}

impl Relay {
    fn new() -> Self {
        let mut app = App::default();
        let tokens_id = app.store_code(Box::new(ContractWrapper::new(
            vaulta_tokens::contract::execute,
            vaulta_tokens::contract::instantiate,
            vaulta_tokens::contract::query,
        )));
        let receiver_id = app.store_code(Box::new(ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        )));

        let mut ledgers = vec![];
        for label in ["ledger", "other ledger"] {
            let ledger = app
                .instantiate_contract(
                    tokens_id,
                    Addr::unchecked(ADMIN),
                    &tokens_msg::InstantiateMsg {
                        owner: ADMIN.to_string(),
                        registry: None,
                    },
                    &[],
                    label,
                    None,
                )
                .unwrap();
            app.execute_contract(
                Addr::unchecked(ADMIN),
                ledger.clone(),
                &tokens_msg::ExecuteMsg::Create {
                    issuer: SENDER.to_string(),
                    maximum_supply: asset("1000.0000 FOO"),
                },
                &[],
            )
            .unwrap();
            app.execute_contract(
                Addr::unchecked(SENDER),
                ledger.clone(),
                &tokens_msg::ExecuteMsg::Issue {
                    to: SENDER.to_string(),
                    quantity: asset("100.0000 FOO"),
                    memo: String::new(),
                },
                &[],
            )
            .unwrap();
            ledgers.push(ledger);
        }
        let other_ledger = ledgers.pop().unwrap();
        let ledger = ledgers.pop().unwrap();

        let receiver = app
            .instantiate_contract(
                receiver_id,
                Addr::unchecked(ADMIN),
                &InstantiateMsg {
                    owner: ADMIN.to_string(),
                },
                &[],
                "mockreceiver",
                None,
            )
            .unwrap();
        for ledger in [&ledger, &other_ledger] {
            app.execute_contract(
                Addr::unchecked(ADMIN),
                ledger.clone(),
                &tokens_msg::ExecuteMsg::AddReceiver {
                    account: receiver.to_string(),
                },
                &[],
            )
            .unwrap();
        }
        app.execute_contract(
            Addr::unchecked(ADMIN),
            receiver.clone(),
            &ExecuteMsg::SetConfig {
                tokencontract: ledger.to_string(),
                sender: SENDER.to_string(),
                destination: DESTINATION.to_string(),
            },
            &[],
        )
        .unwrap();

        Relay {
            app,
            ledger,
            other_ledger,
            receiver,
        }
    }

    fn send(
        &mut self,
        ledger: &Addr,
        from: &str,
        quantity: &str,
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                Addr::unchecked(from),
                ledger.clone(),
                &tokens_msg::ExecuteMsg::Transfer {
                    from: from.to_string(),
                    to: self.receiver.to_string(),
                    quantity: asset(quantity),
                    memo: "relay".to_string(),
                },
                &[],
            )
            .map_err(|err| err.root_cause().to_string())
    }

    fn balance(&self, ledger: &Addr, owner: &str) -> Option<Asset> {
        self.app
            .wrap()
            .query_wasm_smart(
                ledger,
                &tokens_msg::QueryMsg::Balance {
                    owner: owner.to_string(),
                    code: "FOO".to_string(),
                },
            )
            .unwrap()
    }
}

#[test]
fn forwards_to_destination() {
    let mut relay = Relay::new();
    let ledger = relay.ledger.clone();

    let res = relay.send(&ledger, SENDER, "25.0000 FOO").unwrap();
    assert!(res.has_event(
        &Event::new("wasm-crates.io:vaulta__vaulta-mockreceiver-on-transfer")
            .add_attribute("from", SENDER)
            .add_attribute("destination", DESTINATION)
            .add_attribute("quantity", "25.0000 FOO")
    ));

    assert_eq!(
        relay.balance(&ledger, SENDER),
        Some(asset("75.0000 FOO"))
    );
    assert_eq!(
        relay.balance(&ledger, DESTINATION),
        Some(asset("25.0000 FOO"))
    );
    let receiver = relay.receiver.to_string();
    assert_eq!(
        relay.balance(&ledger, &receiver),
        Some(asset("0.0000 FOO"))
    );
}

#[test]
fn forwards_to_contract_destination() {
    let mut relay = Relay::new();
    let (ledger, other_ledger) = (relay.ledger.clone(), relay.other_ledger.clone());
    let receiver = relay.receiver.clone();
    relay
        .app
        .execute_contract(
            Addr::unchecked(ADMIN),
            receiver,
            &ExecuteMsg::SetConfig {
                tokencontract: ledger.to_string(),
                sender: SENDER.to_string(),
                destination: other_ledger.to_string(),
            },
            &[],
        )
        .unwrap();

    // the destination has no `on_transfer` handler and is simply credited
    relay.send(&ledger, SENDER, "5.0000 FOO").unwrap();
    assert_eq!(
        relay.balance(&ledger, other_ledger.as_str()),
        Some(asset("5.0000 FOO"))
    );
}

#[test]
fn rejects_other_sender() {
    let mut relay = Relay::new();
    let ledger = relay.ledger.clone();
    relay
        .app
        .execute_contract(
            Addr::unchecked(SENDER),
            ledger.clone(),
            &tokens_msg::ExecuteMsg::Transfer {
                from: SENDER.to_string(),
                to: "carol".to_string(),
                quantity: asset("10.0000 FOO"),
                memo: String::new(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(
        relay.send(&ledger, "carol", "10.0000 FOO").unwrap_err(),
        "Tokens must be sent from the configured sender account."
    );
    assert_eq!(
        relay.balance(&ledger, "carol"),
        Some(asset("10.0000 FOO"))
    );
    assert_eq!(relay.balance(&ledger, DESTINATION), None);
}

#[test]
fn rejects_other_ledger() {
    let mut relay = Relay::new();
    let other_ledger = relay.other_ledger.clone();

    assert_eq!(
        relay.send(&other_ledger, SENDER, "10.0000 FOO").unwrap_err(),
        "Only the configured token contract may send tokens to the mockreceiver."
    );
    assert_eq!(
        relay.balance(&other_ledger, SENDER),
        Some(asset("100.0000 FOO"))
    );
    let receiver = relay.receiver.to_string();
    assert_eq!(relay.balance(&other_ledger, &receiver), None);
}

#[test]
fn rejects_zero_quantity() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        InstantiateMsg {
            owner: ADMIN.to_string(),
        },
    )
    .unwrap();
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        ExecuteMsg::SetConfig {
            tokencontract: "ledger".to_string(),
            sender: SENDER.to_string(),
            destination: DESTINATION.to_string(),
        },
    )
    .unwrap();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("ledger", &[]),
        ExecuteMsg::OnTransfer(TransferNotification {
            from: SENDER.to_string(),
            to: mock_env().contract.address.to_string(),
            quantity: asset("0.0000 FOO"),
            memo: String::new(),
        }),
    )
    .unwrap_err();
    assert_eq!(err, ContractError::NonPositiveTransfer {});
}
