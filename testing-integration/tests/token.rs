// End-to-end scenarios for the upgradeable token contract, covering the
// modeled contract surface: deployment roles, minting against the max
// supply, the URI matrix, role grant/revoke round-trips and upgrade
// continuity.

use onion_common::nft::{
    Event, LogicV1, NftError, DEFAULT_ADMIN_ROLE, MINTER_ROLE, UPGRADER_ROLE,
};
use onion_testing_integration::utils::{
    access_control_err, deploy, random_address, Accounts, BASE_URI, NAME, SYMBOL,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn owner_holds_default_admin_role() {
    init();
    let accounts = Accounts::new();
    let proxy = deploy(&accounts).unwrap();

    assert_eq!(proxy.owner().unwrap(), accounts.owner);
    assert_eq!(proxy.name().unwrap(), NAME);
    assert_eq!(proxy.symbol().unwrap(), SYMBOL);
    assert!(proxy.has_role(&DEFAULT_ADMIN_ROLE, &accounts.owner));
}

#[test]
fn safe_mint_tracks_balances_for_arbitrary_recipients() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    let first = random_address();
    let second = random_address();

    proxy.safe_mint(accounts.owner, first).unwrap();
    proxy.safe_mint(accounts.owner, first).unwrap();
    proxy.safe_mint(accounts.owner, second).unwrap();

    assert_eq!(proxy.balance_of(&first), 2);
    assert_eq!(proxy.balance_of(&second), 1);
    assert_eq!(proxy.balance_of(&accounts.owner), 0);
    assert_eq!(proxy.total_supply(), 3);
}

#[test]
fn safe_mint_success_only_default_admin() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
    assert_eq!(proxy.owner_of(0).unwrap(), accounts.bob);
}

#[test]
fn safe_mint_rejects_non_admin_caller() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    let err = proxy.safe_mint(accounts.bob, accounts.bob).unwrap_err();
    assert_eq!(
        err.to_string(),
        access_control_err(&accounts.bob, &DEFAULT_ADMIN_ROLE)
    );

    let err = proxy.owner_of(0).unwrap_err();
    assert_eq!(err.to_string(), "ERC721: owner query for nonexistent token");
}

#[test]
fn explicit_mint_out_of_order_until_max_supply() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    proxy.mint(accounts.owner, accounts.bob, 3).unwrap();
    proxy.mint(accounts.owner, accounts.bob, 2).unwrap();
    proxy.mint(accounts.owner, accounts.bob, 1).unwrap();
    assert_eq!(proxy.total_supply(), 3);
    assert_eq!(proxy.owner_of(2).unwrap(), accounts.bob);

    let err = proxy.mint(accounts.owner, accounts.bob, 0).unwrap_err();
    assert_eq!(err.to_string(), "Purchase would exceed max tokens");
    assert_eq!(proxy.owner_of(0), Err(NftError::NonexistentToken));
}

#[test]
fn safe_mint_rejected_beyond_max_supply() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    for _ in 0..3 {
        proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
    }
    assert_eq!(proxy.owner_of(2).unwrap(), accounts.bob);

    let err = proxy.safe_mint(accounts.owner, accounts.bob).unwrap_err();
    assert_eq!(err.to_string(), "Purchase would exceed max tokens");
    assert_eq!(proxy.owner_of(3), Err(NftError::NonexistentToken));
    assert_eq!(proxy.total_supply(), 3);
}

#[test]
fn sale_mint_rejected_beyond_max_supply() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();

    for _ in 0..3 {
        proxy.sale_mint(accounts.owner, accounts.bob).unwrap();
    }
    assert_eq!(proxy.owner_of(2).unwrap(), accounts.bob);

    let err = proxy.sale_mint(accounts.owner, accounts.bob).unwrap_err();
    assert_eq!(err.to_string(), "Purchase would exceed max tokens");
    assert_eq!(proxy.owner_of(3), Err(NftError::NonexistentToken));
}

mod upgrade {
    use super::*;

    #[test]
    fn rejects_caller_without_upgrader_role() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        let err = proxy
            .upgrade_to(accounts.bob, Box::new(LogicV1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            access_control_err(&accounts.bob, &UPGRADER_ROLE)
        );
    }

    #[test]
    fn serves_new_token_uri_after_upgrade() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        assert!(proxy.has_role(&UPGRADER_ROLE, &accounts.owner));
        assert!(!proxy.has_role(&UPGRADER_ROLE, &accounts.bob));
        assert!(!proxy.has_role(&MINTER_ROLE, &accounts.bob));

        proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
        assert_eq!(proxy.token_uri(0).unwrap(), "https://mvlnft.io/meta/0");

        proxy.upgrade_to(accounts.owner, Box::new(LogicV1)).unwrap();

        // The resolver base path changed; ownership did not
        assert_eq!(proxy.token_uri(0).unwrap(), "https://mvlnft.io/metadata/0");
        assert_eq!(proxy.owner_of(0).unwrap(), accounts.bob);
    }

    #[test]
    fn persisted_state_identical_across_upgrade() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
        proxy.drain_events();
        let before = proxy.storage().snapshot().unwrap();

        proxy.upgrade_to(accounts.owner, Box::new(LogicV1)).unwrap();
        proxy.drain_events();
        let after = proxy.storage().snapshot().unwrap();

        assert_eq!(before, after);
    }
}

mod base_uri {
    use super::*;

    #[test]
    fn default_base_uri_after_deploy() {
        init();
        let accounts = Accounts::new();
        let proxy = deploy(&accounts).unwrap();
        assert_eq!(proxy.base_uri().unwrap(), BASE_URI);
    }

    #[test]
    fn set_base_uri_changes_base_uri() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        proxy
            .set_base_uri(accounts.owner, "https://mvlnft.io/metadata/")
            .unwrap();
        assert_eq!(proxy.base_uri().unwrap(), "https://mvlnft.io/metadata/");
    }

    #[test]
    fn set_base_uri_accepts_empty_string() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        proxy.set_base_uri(accounts.owner, "").unwrap();
        assert_eq!(proxy.base_uri().unwrap(), "");
    }

    #[test]
    fn set_base_uri_rejects_non_admin() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        let err = proxy
            .set_base_uri(accounts.bob, "https://mvlnft.io/metadata/")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            access_control_err(&accounts.bob, &DEFAULT_ADMIN_ROLE)
        );
    }

    mod token_zero_minted {
        use super::*;
        use onion_common::nft::{MemoryStorage, NftProxy};

        fn deploy_with_token(accounts: &Accounts) -> NftProxy<MemoryStorage> {
            let mut proxy = deploy(accounts).unwrap();
            proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
            proxy
        }

        #[test]
        fn base_no_specific_uri() {
            init();
            let accounts = Accounts::new();
            let proxy = deploy_with_token(&accounts);
            assert_eq!(proxy.token_uri(0).unwrap(), "https://mvlnft.io/meta/0");
        }

        #[test]
        fn base_with_specific_uri() {
            init();
            let accounts = Accounts::new();
            let mut proxy = deploy_with_token(&accounts);

            proxy
                .set_token_uri(accounts.owner, 0, "some-specific-uri")
                .unwrap();
            assert_eq!(
                proxy.token_uri(0).unwrap(),
                "https://mvlnft.io/meta/some-specific-uri"
            );
        }

        #[test]
        fn empty_base_no_specific_uri() {
            init();
            let accounts = Accounts::new();
            let mut proxy = deploy_with_token(&accounts);

            proxy.set_base_uri(accounts.owner, "").unwrap();
            assert_eq!(proxy.token_uri(0).unwrap(), "");
        }

        #[test]
        fn empty_base_with_specific_uri() {
            init();
            let accounts = Accounts::new();
            let mut proxy = deploy_with_token(&accounts);

            proxy.set_base_uri(accounts.owner, "").unwrap();
            proxy
                .set_token_uri(accounts.owner, 0, "some-specific-uri")
                .unwrap();
            assert_eq!(proxy.token_uri(0).unwrap(), "some-specific-uri");
        }
    }
}

mod minter {
    use super::*;

    #[test]
    fn deployer_can_mint_with_sale_mint() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();
        proxy.drain_events();

        proxy.sale_mint(accounts.owner, accounts.bob).unwrap();
        let events = proxy.drain_events();
        assert!(events
            .iter()
            .any(|event| event.name() == "Transfer"));
    }

    #[test]
    fn sale_mint_rejects_caller_without_minter_role() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        let err = proxy.sale_mint(accounts.bob, accounts.bob).unwrap_err();
        assert_eq!(
            err.to_string(),
            access_control_err(&accounts.bob, &MINTER_ROLE)
        );
    }

    #[test]
    fn admin_can_set_minter() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();
        proxy.drain_events();

        proxy.set_minter(accounts.owner, &accounts.bob).unwrap();
        let events = proxy.drain_events();
        assert!(events
            .iter()
            .any(|event| event.name() == "RoleGranted"));

        // Bob can now mint through the sale path
        proxy.sale_mint(accounts.bob, accounts.jane).unwrap();
        assert_eq!(proxy.owner_of(0).unwrap(), accounts.jane);
    }

    #[test]
    fn admin_can_remove_from_minter() {
        init();
        let accounts = Accounts::new();
        let mut proxy = deploy(&accounts).unwrap();

        proxy.set_minter(accounts.owner, &accounts.bob).unwrap();
        proxy.drain_events();

        proxy
            .remove_from_minter(accounts.owner, &accounts.bob)
            .unwrap();
        let events = proxy.drain_events();
        assert!(events
            .iter()
            .any(|event| event.name() == "RoleRevoked"));

        // Pre-grant access-denied behavior is restored
        let err = proxy.sale_mint(accounts.bob, accounts.bob).unwrap_err();
        assert_eq!(
            err.to_string(),
            access_control_err(&accounts.bob, &MINTER_ROLE)
        );
    }
}

#[test]
fn failed_calls_commit_nothing() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();
    proxy.drain_events();

    // Access violation: no state, no events
    proxy.safe_mint(accounts.sara, accounts.sara).unwrap_err();
    assert_eq!(proxy.total_supply(), 0);
    assert!(proxy.drain_events().is_empty());

    // Invariant violation after filling the supply: supply stays put
    for _ in 0..3 {
        proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
    }
    proxy.drain_events();
    proxy.safe_mint(accounts.owner, accounts.bob).unwrap_err();
    assert_eq!(proxy.total_supply(), 3);
    assert!(proxy.drain_events().is_empty());
}

#[test]
fn mint_emits_transfer_from_zero_address() {
    init();
    let accounts = Accounts::new();
    let mut proxy = deploy(&accounts).unwrap();
    proxy.drain_events();

    proxy.safe_mint(accounts.owner, accounts.bob).unwrap();
    let events = proxy.drain_events();
    assert_eq!(
        events,
        vec![Event::Transfer {
            from: onion_common::crypto::Address::zero(),
            to: accounts.bob,
            token_id: 0,
        }]
    );
}
