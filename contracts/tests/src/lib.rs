#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use campaign_sale::{CampaignError, CampaignSaleContract, CampaignSaleContractClient as SaleClient};
use ledger_common::clock::WEEK;
use staking::{StakingContract, StakingContractClient as StakingClient, StakingError};

struct Protocol<'a> {
    env: Env,
    admin: Address,
    token: TokenClient<'a>,
    sale: SaleClient<'a>,
    staking: StakingClient<'a>,
}

impl<'a> Protocol<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let admin = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(admin.clone());
        let token = TokenClient::new(&env, &asset.address());

        let sale = SaleClient::new(&env, &env.register(CampaignSaleContract, ()));
        let staking = StakingClient::new(&env, &env.register(StakingContract, ()));
        sale.initialize(&token.address);
        staking.initialize(&admin, &token.address);

        Protocol {
            env,
            admin,
            token,
            sale,
            staking,
        }
    }

    fn account(&self, balance: i128) -> Address {
        let account = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.token.address).mint(&account, &balance);
        account
    }

    fn advance(&self, seconds: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + seconds);
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

#[test]
fn test_ledgers_keep_separate_custody() {
    let p = Protocol::new();
    let creator = p.account(0);
    let alice = p.account(10_000);
    let bob = p.account(5_000);

    // Staking pool and a stake.
    p.staking.approve_reward(&p.admin, &alice, &1_000);
    p.staking.add_reward(&alice, &500);
    p.staking.deposit(&bob, &400);

    // A campaign funded by both.
    let id = p.sale.launch_campaign(&creator, &1_000, &(p.now() + WEEK), &(p.now() + 5 * WEEK));
    p.advance(2 * WEEK);
    p.sale.contribute(&alice, &id, &700);
    p.sale.contribute(&bob, &id, &200);

    assert_eq!(p.token.balance(&p.staking.address), 900);
    assert_eq!(p.token.balance(&p.sale.address), 900);

    // The sale's custody never counts toward staking solvency:
    // 400 + 500 + 10 > 900 even though the token holds 1_800 across both.
    assert_eq!(
        p.staking.try_deposit(&alice, &500),
        Err(Ok(StakingError::InsufficientRewardFunds))
    );

    // Claim the campaign and close the stake.
    p.advance(3 * WEEK);
    assert_eq!(p.sale.claim_campaign(&creator, &id), 900);
    // 5w * 2 * 400 / (4w * 100) = 10
    assert_eq!(p.staking.withdraw(&bob), 410);

    assert_eq!(p.token.balance(&creator), 900);
    assert_eq!(p.token.balance(&p.sale.address), 0);
    assert_eq!(p.token.balance(&p.staking.address), 490);
    assert_eq!(p.staking.reward_total(), 490);
    assert_eq!(p.token.balance(&bob), 5_000 - 200 + 10);
}

#[test]
fn test_failed_campaign_refunds_everyone() {
    let p = Protocol::new();
    let creator = p.account(0);
    let contributors = [p.account(1_000), p.account(1_000), p.account(1_000)];

    let id = p.sale.launch_campaign(&creator, &5_000, &(p.now() + WEEK), &(p.now() + 6 * WEEK));
    p.advance(2 * WEEK);

    for (i, contributor) in contributors.iter().enumerate() {
        p.sale.contribute(contributor, &id, &(100 * (i as i128 + 1)));
    }
    p.sale.withdraw(&contributors[2], &id, &50);

    let pledged = p.sale.get_campaign(&id).pledged;
    let sum: i128 = contributors.iter().map(|c| p.sale.pledge_of(&id, c)).sum();
    assert_eq!(pledged, 550);
    assert_eq!(pledged, sum);

    p.advance(5 * WEEK);
    for contributor in contributors.iter() {
        p.sale.refund_campaign(contributor, &id);
        assert_eq!(p.token.balance(contributor), 1_000);
    }

    let campaign = p.sale.get_campaign(&id);
    assert_eq!(campaign.pledged, 0);
    assert!(!campaign.claimed);
    assert_eq!(p.token.balance(&p.sale.address), 0);

    // Nothing left for the creator, but claiming still closes the campaign.
    assert_eq!(p.sale.claim_campaign(&creator, &id), 0);
    assert_eq!(
        p.sale.try_claim_campaign(&creator, &id),
        Err(Ok(CampaignError::AlreadyClaimed))
    );
}

#[test]
fn test_many_stakers_share_one_pool() {
    let p = Protocol::new();
    let funder = p.account(10_000);
    let stakers = [p.account(2_000), p.account(2_000), p.account(2_000)];

    p.staking.approve_reward(&p.admin, &funder, &5_000);
    p.staking.add_reward(&funder, &5_000);

    for staker in stakers.iter() {
        p.staking.deposit(staker, &1_000);
        p.advance(WEEK);
    }
    assert_eq!(p.staking.total_staked(), 3_000);

    // Last deposit was one week ago; everyone is past four weeks after three more.
    p.advance(3 * WEEK);

    let mut paid_rewards = 0;
    for (i, staker) in stakers.iter().enumerate() {
        let elapsed = (6 - i as i128) * WEEK as i128;
        let expected = elapsed * 2 * 1_000 / (4 * WEEK as i128 * 100);
        assert_eq!(p.staking.withdraw(staker), 1_000 + expected);
        paid_rewards += expected;
    }

    assert_eq!(paid_rewards, 30 + 25 + 20);
    assert_eq!(p.staking.total_staked(), 0);
    assert_eq!(p.staking.reward_total(), 5_000 - paid_rewards);
    assert_eq!(p.token.balance(&p.staking.address), 5_000 - paid_rewards);
}
