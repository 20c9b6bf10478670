use axum::{extract::Query, response::Html};
use serde::Deserialize;

/// Query string the gateway appends when redirecting back after 3D Secure.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ReturnParams {
    #[serde(default)]
    payment_intent: Option<String>,
    #[serde(default)]
    redirect_status: Option<String>,
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Partner - Payment Return</title>
    <style>
        body { font-family: Arial, sans-serif; padding: 20px; max-width: 600px; margin: 0 auto; }
        .success { color: #2e7d32; background: #e8f5e9; padding: 15px; border-radius: 4px; }
        .processing { color: #f57c00; background: #fff3e0; padding: 15px; border-radius: 4px; }
        .failed { color: #d32f2f; background: #ffebee; padding: 15px; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>Partner Payment Processing</h1>
    <div class="__CLASS__">
        <h3>Payment Status: __STATUS__</h3>
        <p><strong>Payment Intent:</strong> __INTENT__</p>
        <p>Please wait while we verify your payment...</p>
    </div>

    <h3>Next Steps for Integration:</h3>
    <ol>
        <li>Call <code>GET /api/v1/payments/direct/status/__INTENT__</code> to verify the final payment status</li>
        <li>Update your order status based on the payment result</li>
        <li>Redirect customer to appropriate success/failure page</li>
    </ol>

    <script>
        const paymentIntent = __INTENT_JSON__;
        setTimeout(() => {
            if (!paymentIntent) return;
            fetch('/api/v1/payments/direct/status/' + encodeURIComponent(paymentIntent))
                .then(response => response.json())
                .then(body => {
                    const status = body.data && body.data.status;
                    if (body.success && status === 'succeeded') {
                        document.body.innerHTML += '<div class="success"><h3>Payment Confirmed!</h3><p>Your payment has been successfully processed.</p></div>';
                    } else if (status === 'failed') {
                        document.body.innerHTML += '<div class="failed"><h3>Payment Failed</h3><p>Unfortunately, your payment could not be processed.</p></div>';
                    }
                })
                .catch(error => console.error('Error checking payment status:', error));
        }, __POLL_DELAY_MS__);
    </script>
</body>
</html>
"#;

const POLL_DELAY_MS: u32 = 3000;

/// `GET /return`: landing page after 3D Secure authentication.
///
/// Shows the redirect status and polls the direct status endpoint once.
pub(super) async fn payment_return(Query(params): Query<ReturnParams>) -> Html<String> {
    let status = params
        .redirect_status
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("processing");
    let intent = params.payment_intent.as_deref().unwrap_or_default();

    tracing::info!(payment_intent = %intent, redirect_status = %status, "Payment return");

    Html(render(intent, status))
}

fn render(intent: &str, status: &str) -> String {
    let class = match status {
        "succeeded" => "success",
        "failed" => "failed",
        _ => "processing",
    };
    PAGE.replace("__CLASS__", class)
        .replace("__STATUS__", &escape_html(status))
        .replace("__INTENT_JSON__", &js_string(intent))
        .replace("__INTENT__", &escape_html(intent))
        .replace("__POLL_DELAY_MS__", &POLL_DELAY_MS.to_string())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// JSON string literal safe to embed in a `<script>` block.
fn js_string(raw: &str) -> String {
    serde_json::Value::from(raw)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}
