use hamster_core::{AccountId, ActionOutcome, Gender, HamsterId, SleepReport};
use runtime::{
    AccountFixture, ErrorKind, GameEvent, HamsterFixture, RequestContext, Runtime, RuntimeConfig,
    RuntimeHandle, Scenario, Topic,
};
use tempfile::TempDir;

const ADMIN_EMAIL: &str = "admin@test.com";
const ADMIN_PASSWORD: &str = "adminpass";

/// Player fixture (id 1, hamsters 1..=4: m, m, f, f) plus an admin (id 2).
async fn start() -> (Runtime, RuntimeHandle, RequestContext, RequestContext) {
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_seed: 7,
            ..RuntimeConfig::default()
        })
        .scenario(Scenario::player().with_admin(ADMIN_EMAIL, ADMIN_PASSWORD))
        .build()
        .await
        .expect("Runtime should start successfully");
    let handle = runtime.handle();

    let player = handle
        .login(Scenario::PLAYER_EMAIL, Scenario::PLAYER_PASSWORD)
        .await
        .expect("player should log in");
    let admin = handle
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("admin should log in");

    (runtime, handle, player, admin)
}

fn fixture(email: &str, gold: i64, admin: bool) -> AccountFixture {
    AccountFixture {
        email: email.to_string(),
        password: "password".to_string(),
        admin,
        gold,
        hamsters: vec![HamsterFixture::newborn("Broke", Gender::Male)],
    }
}

#[tokio::test]
async fn seeded_player_profile() {
    let (_runtime, handle, player, _) = start().await;

    let profile = handle.profile(player).await.unwrap();
    assert_eq!(profile.email, "test@test.com");
    assert_eq!(profile.gold, 500);
    assert_eq!(profile.roles, vec!["ROLE_USER"]);

    let names: Vec<_> = profile.hamsters.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Hamster0", "Hamster1", "Hamster2", "Hamster3"]);
    assert!(profile.hamsters.iter().all(|h| h.hunger == 100 && h.age == 0 && h.active));
}

#[tokio::test]
async fn anonymous_and_bad_credentials_are_unauthenticated() {
    let (_runtime, handle, _, _) = start().await;

    let err = handle.profile(RequestContext::anonymous()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert_eq!(err.status_code(), 401);

    let err = handle
        .login(Scenario::PLAYER_EMAIL, "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn feed_charges_missing_hunger_and_ticks_household() {
    let (_runtime, handle, player, _) = start().await;

    let err = handle.feed(player, HamsterId(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadySatiated);
    assert_eq!(handle.profile(player).await.unwrap().gold, 500);

    // hunger 100 -> 40
    handle.sleep(player, 60).await.unwrap();

    let receipt = handle.feed(player, HamsterId(1)).await.unwrap();
    assert_eq!(
        receipt.outcome,
        ActionOutcome::Fed {
            hamster: HamsterId(1),
            cost: 60
        }
    );
    assert_eq!(receipt.gold, 440);
    assert_eq!(receipt.hamsters[0].hunger, 100);
    assert_eq!(receipt.hamsters[0].age, 65);

    let hamsters = handle.hamsters(player).await.unwrap();
    for other in &hamsters[1..] {
        assert_eq!(other.age, 65);
        assert_eq!(other.hunger, 35);
    }
}

#[tokio::test]
async fn feed_requires_funds() {
    let runtime = Runtime::builder()
        .scenario(Scenario {
            accounts: vec![AccountFixture {
                hamsters: vec![HamsterFixture {
                    hunger: 10,
                    ..HamsterFixture::newborn("Starving", Gender::Female)
                }],
                ..fixture("poor@test.com", 50, false)
            }],
        })
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let poor = handle.login("poor@test.com", "password").await.unwrap();

    let err = handle.feed(poor, HamsterId(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);

    let hamster = handle.hamster(poor, HamsterId(1)).await.unwrap();
    assert_eq!(hamster.hunger, 10);
    assert_eq!(hamster.age, 0);
}

#[tokio::test]
async fn sell_pays_out_and_ages_the_rest() {
    let (_runtime, handle, player, _) = start().await;

    let receipt = handle.sell(player, HamsterId(2)).await.unwrap();
    assert_eq!(
        receipt.outcome,
        ActionOutcome::Sold {
            hamster: HamsterId(2),
            payout: 300
        }
    );
    assert_eq!(receipt.gold, 800);
    assert!(receipt.hamsters.is_empty());

    let hamsters = handle.hamsters(player).await.unwrap();
    assert_eq!(hamsters.len(), 3);
    assert!(hamsters.iter().all(|h| h.id != HamsterId(2)));
    assert!(hamsters.iter().all(|h| h.age == 5 && h.hunger == 95));

    let err = handle.hamster(player, HamsterId(2)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn reproduce_creates_one_unaged_baby() {
    let (_runtime, handle, player, _) = start().await;

    let receipt = handle
        .reproduce(player, HamsterId(1), HamsterId(3))
        .await
        .unwrap();
    assert_eq!(receipt.born.len(), 1);

    let baby = &receipt.born[0];
    assert_eq!(baby.id, HamsterId(5));
    assert_eq!(baby.owner, AccountId(1));
    assert_eq!((baby.age, baby.hunger, baby.active), (0, 100, true));
    assert!(baby.name.starts_with("Baby"));
    let suffix: u32 = baby.name["Baby".len()..].parse().unwrap();
    assert!((100..=999).contains(&suffix));

    let hamsters = handle.hamsters(player).await.unwrap();
    assert_eq!(hamsters.len(), 5);
    assert!(hamsters[..4].iter().all(|h| h.age == 5));
}

#[tokio::test]
async fn reproduce_rejects_same_gender_and_inactive_parents() {
    let (_runtime, handle, player, _) = start().await;

    let err = handle
        .reproduce(player, HamsterId(1), HamsterId(2))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SameGender);
    assert_eq!(handle.hamsters(player).await.unwrap().len(), 4);

    handle.sleep(player, 600).await.unwrap();
    let err = handle
        .reproduce(player, HamsterId(1), HamsterId(3))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InactiveHamster);
}

#[tokio::test]
async fn sleep_reports_affected_and_deactivated() {
    let (_runtime, handle, player, _) = start().await;

    let receipt = handle.sleep(player, 0).await.unwrap();
    assert_eq!(
        receipt.outcome,
        ActionOutcome::Slept(SleepReport {
            days: 0,
            affected: 0,
            inactive_hamsters: 0
        })
    );

    let receipt = handle.sleep(player, 600).await.unwrap();
    assert_eq!(
        receipt.outcome,
        ActionOutcome::Slept(SleepReport {
            days: 600,
            affected: 4,
            inactive_hamsters: 4
        })
    );
    let hamsters = handle.hamsters(player).await.unwrap();
    assert!(hamsters.iter().all(|h| h.age == 600 && !h.active));

    let err = handle.sleep(player, -1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn inactive_hamsters_can_still_be_fed_and_sold() {
    let (_runtime, handle, player, _) = start().await;
    // hunger drops to -400; feeding costs exactly the whole balance
    handle.sleep(player, 500).await.unwrap();

    let receipt = handle.feed(player, HamsterId(1)).await.unwrap();
    assert!(!receipt.hamsters[0].active);
    assert_eq!(receipt.hamsters[0].hunger, 100);

    handle.sell(player, HamsterId(2)).await.unwrap();
}

#[tokio::test]
async fn rename_validates_and_short_circuits() {
    let (_runtime, handle, player, _) = start().await;

    for bad in ["x", "   ", " y "] {
        let err = handle.rename(player, HamsterId(1), bad).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
    }

    let receipt = handle.rename(player, HamsterId(1), "Hamster0").await.unwrap();
    assert_eq!(
        receipt.outcome,
        ActionOutcome::Unchanged {
            hamster: HamsterId(1)
        }
    );

    let receipt = handle.rename(player, HamsterId(1), " Nibbles ").await.unwrap();
    assert_eq!(receipt.hamsters[0].name, "Nibbles");
    // rename does not tick
    assert_eq!(receipt.hamsters[0].age, 0);
}

#[tokio::test]
async fn foreign_hamsters_are_forbidden() {
    let (_runtime, handle, player, admin) = start().await;
    handle.register("other@test.com", "longpassword").await.unwrap();
    let other = handle.login("other@test.com", "longpassword").await.unwrap();

    let err = handle.feed(other, HamsterId(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert_eq!(err.status_code(), 403);
    assert_eq!(
        handle.hamster(other, HamsterId(1)).await.unwrap_err().kind(),
        ErrorKind::Forbidden
    );
    assert_eq!(
        handle.rename(other, HamsterId(1), "Mine").await.unwrap_err().kind(),
        ErrorKind::Forbidden
    );

    // admins may read and rename, but not act on someone else's household
    assert_eq!(handle.hamster(admin, HamsterId(1)).await.unwrap().name, "Hamster0");
    handle.rename(admin, HamsterId(1), "Renamed").await.unwrap();
    assert_eq!(
        handle.sell(admin, HamsterId(1)).await.unwrap_err().kind(),
        ErrorKind::Forbidden
    );

    let profile = handle.profile(player).await.unwrap();
    assert_eq!(profile.hamsters[0].name, "Renamed");
    assert_eq!(profile.gold, 500);
}

#[tokio::test]
async fn negative_balance_blocks_everything_but_registration() {
    let runtime = Runtime::builder()
        .scenario(Scenario {
            accounts: vec![
                fixture("broke@test.com", -10, false),
                fixture("broke-admin@test.com", -10, true),
            ],
        })
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let broke = handle.login("broke@test.com", "password").await.unwrap();
    for err in [
        handle.profile(broke).await.unwrap_err(),
        handle.hamsters(broke).await.unwrap_err(),
        handle.sell(broke, HamsterId(1)).await.unwrap_err(),
        handle.sleep(broke, 0).await.unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::Blocked);
        assert_eq!(err.to_string(), runtime::BLOCKED_MESSAGE);
    }

    handle.register("fresh@test.com", "longpassword").await.unwrap();

    let admin = handle.login("broke-admin@test.com", "password").await.unwrap();
    assert_eq!(handle.profile(admin).await.unwrap().gold, -10);
}

#[tokio::test]
async fn admin_deletes_account_with_hamsters() {
    let (_runtime, handle, player, admin) = start().await;

    let err = handle.delete_account(player, AccountId(2)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let mut events = handle.subscribe(Topic::Account);
    let receipt = handle.delete_account(admin, AccountId(1)).await.unwrap();
    assert_eq!(receipt.hamsters_removed, 4);
    assert!(matches!(
        events.recv().await.unwrap(),
        GameEvent::AccountDeleted {
            account: AccountId(1),
            hamsters_removed: 4,
            ..
        }
    ));

    let err = handle.hamster(admin, HamsterId(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = handle.profile(player).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);

    let err = handle.delete_account(admin, AccountId(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn registration_validates_input() {
    let (_runtime, handle, _, _) = start().await;

    let account = handle
        .register("  new@test.com ", "longpassword")
        .await
        .unwrap();
    assert_eq!(account.email, "new@test.com");
    assert_eq!(account.gold, 500);
    assert!(account.hamsters.is_empty());

    let err = handle.register("not-an-email", "longpassword").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert_eq!(err.status_code(), 400);

    let err = handle.register("short@test.com", "short").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);

    let err = handle.register("NEW@test.com", "longpassword").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn concurrent_feeds_are_applied_one_after_the_other() {
    let (_runtime, handle, player, _) = start().await;
    handle.sleep(player, 60).await.unwrap();

    let (first, second) = tokio::join!(
        handle.feed(player, HamsterId(1)),
        handle.feed(player, HamsterId(2)),
    );
    first.unwrap();
    second.unwrap();

    // 60 for the first feed, then 65 after its tick drained the second hamster
    let profile = handle.profile(player).await.unwrap();
    assert_eq!(profile.gold, 500 - 60 - 65);
    assert_eq!(profile.hamsters[0].hunger, 100);
    assert_eq!(profile.hamsters[1].hunger, 100);
}

#[tokio::test]
async fn actions_publish_events() {
    let (_runtime, handle, player, _) = start().await;
    let mut events = handle.subscribe(Topic::Action);

    handle.sell(player, HamsterId(4)).await.unwrap();
    match events.recv().await.unwrap() {
        GameEvent::ActionExecuted { account, delta, .. } => {
            assert_eq!(account, AccountId(1));
            assert_eq!(delta.removed, vec![HamsterId(4)]);
            assert_eq!(delta.updated.len(), 3);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    handle
        .reproduce(player, HamsterId(1), HamsterId(2))
        .await
        .unwrap_err();
    assert!(matches!(
        events.recv().await.unwrap(),
        GameEvent::ActionRejected { .. }
    ));
}

#[tokio::test]
async fn file_repository_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = RuntimeConfig {
        data_dir: Some(temp_dir.path().to_path_buf()),
        seed_fixtures: true,
        ..RuntimeConfig::default()
    };

    let runtime = Runtime::builder().config(config.clone()).build().await.unwrap();
    let handle = runtime.handle();
    let player = handle
        .login(Scenario::PLAYER_EMAIL, Scenario::PLAYER_PASSWORD)
        .await
        .unwrap();
    handle.sell(player, HamsterId(1)).await.unwrap();
    drop(handle);
    runtime.shutdown().await.unwrap();

    let runtime = Runtime::builder().config(config).build().await.unwrap();
    let handle = runtime.handle();
    let player = handle
        .login(Scenario::PLAYER_EMAIL, Scenario::PLAYER_PASSWORD)
        .await
        .unwrap();

    let profile = handle.profile(player).await.unwrap();
    assert_eq!(profile.gold, 800);
    assert_eq!(profile.hamsters.len(), 3);
    assert!(profile.hamsters.iter().all(|h| h.age == 5));
}

#[tokio::test]
async fn breeding_varies_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let mut babies = Vec::new();

    for _ in 0..10 {
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                data_dir: Some(temp_dir.path().to_path_buf()),
                seed_fixtures: true,
                ..RuntimeConfig::default()
            })
            .build()
            .await
            .unwrap();
        let handle = runtime.handle();
        let player = handle
            .login(Scenario::PLAYER_EMAIL, Scenario::PLAYER_PASSWORD)
            .await
            .unwrap();

        let receipt = handle
            .reproduce(player, HamsterId(1), HamsterId(3))
            .await
            .unwrap();
        let baby = &receipt.born[0];
        babies.push((baby.name.clone(), baby.gender));

        drop(handle);
        runtime.shutdown().await.unwrap();
    }

    let first = &babies[0];
    assert!(
        babies.iter().any(|baby| baby != first),
        "every restart bred {first:?}"
    );
}

#[tokio::test]
async fn only_admins_may_seed_admin_accounts() {
    let (_runtime, handle, player, admin) = start().await;
    let rogue = || Scenario::default().with_admin("rogue@test.com", "roguepass");

    let err = handle
        .seed(RequestContext::anonymous(), rogue())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);

    let err = handle.seed(player, rogue()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let err = handle.login("rogue@test.com", "roguepass").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);

    let report = handle.seed(admin, rogue()).await.unwrap();
    assert_eq!(report.accounts_created, 1);
    assert!(handle.login("rogue@test.com", "roguepass").await.is_ok());

    let players = Scenario {
        accounts: vec![fixture("fresh@test.com", 500, false)],
    };
    let report = handle
        .seed(RequestContext::anonymous(), players)
        .await
        .unwrap();
    assert_eq!(report.accounts_created, 1);
}
