//! Catalog of canned test scenarios for partner integration testing.

use ppay_sdk::objects::{
    PaymentMethod, PaymentMethodType, Scenario, ScenarioCatalog, ScenarioSummary, ScenarioUsage,
};

/// One entry of the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestScenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub token: &'static str,
    pub card_brand: &'static str,
    pub card_country: &'static str,
    pub last4: &'static str,
}

pub const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        id: "success",
        title: "Successful Payment (No 3D Secure)",
        description: "Payment succeeds immediately without requiring 3D Secure authentication",
        token: "pm_card_visa",
        card_brand: "visa",
        card_country: "MY",
        last4: "4242",
    },
    TestScenario {
        id: "threeDSecure",
        title: "3D Secure Required",
        description: "Payment requires 3D Secure authentication before completion",
        token: "pm_card_threeDSecure2Required",
        card_brand: "visa",
        card_country: "MY",
        last4: "0002",
    },
    TestScenario {
        id: "declined",
        title: "Card Declined",
        description: "Payment fails due to card being declined",
        token: "pm_card_visa_chargeDeclined",
        card_brand: "visa",
        card_country: "MY",
        last4: "0341",
    },
];

/// Header used by the hosted checkout demo, which has no card scenario.
pub const HOSTED_CHECKOUT: ScenarioHeader = ScenarioHeader {
    id: "hosted_checkout",
    title: "Hosted Payment (Checkout Page)",
    description: "Customer will be redirected to the gateway's hosted checkout page",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioHeader {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl ScenarioHeader {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            name: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

impl TestScenario {
    pub fn payment_method(&self) -> PaymentMethod {
        PaymentMethod {
            kind: PaymentMethodType::Card,
            token: self.token.to_owned(),
            card_brand: Some(self.card_brand.to_owned()),
            card_country: Some(self.card_country.to_owned()),
            last4: Some(self.last4.to_owned()),
        }
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioHeader {
            id: self.id,
            title: self.title,
            description: self.description,
        }
        .summary()
    }

    fn to_scenario(self) -> Scenario {
        Scenario {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            payment_method: self.payment_method(),
        }
    }
}

/// Look up a scenario by id (case-sensitive).
pub fn find(id: &str) -> Option<&'static TestScenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Comma-separated list of valid scenario ids, in catalog order.
pub fn ids() -> String {
    SCENARIOS.iter().map(|s| s.id).collect::<Vec<_>>().join(", ")
}

/// The full catalog with usage instructions.
pub fn catalog() -> ScenarioCatalog {
    ScenarioCatalog {
        scenarios: SCENARIOS
            .iter()
            .map(|s| (s.id.to_owned(), s.to_scenario()))
            .collect(),
        usage: ScenarioUsage {
            description: "Use these test scenarios to verify your payment integration".to_owned(),
            steps: [
                "1. Create a test order using the orders API",
                "2. Choose a payment scenario from the list above",
                "3. Call POST /api/v1/demo/test-payment with the scenario and order code",
                "4. Follow the payment flow based on the response",
                "5. For 3D Secure scenarios, complete authentication and check status",
            ]
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
        },
    }
}
