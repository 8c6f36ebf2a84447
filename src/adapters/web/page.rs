//! Order form page rendering.

/// Flash message shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// `success` or `danger`.
    pub category: FlashCategory,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCategory {
    Success,
    Danger,
}

impl FlashCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "success" {
            Self::Success
        } else {
            Self::Danger
        }
    }
}

/// Escape text for safe inclusion in HTML.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the order form, with an optional flash message.
#[must_use]
pub fn render_form(flash: Option<&Flash>) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="alert alert-{}" role="alert">{}</div>"#,
                f.category.as_str(),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Futures Order Bot</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
<div class="container py-5" style="max-width: 560px">
  <h1 class="h3 mb-4">Place Futures Order</h1>
  {flash_html}
  <form method="post" action="/">
    <div class="mb-3">
      <label class="form-label" for="symbol">Symbol</label>
      <input class="form-control" id="symbol" name="symbol" placeholder="BTCUSDT" required>
    </div>
    <div class="mb-3">
      <label class="form-label" for="side">Side</label>
      <select class="form-select" id="side" name="side">
        <option value="BUY">BUY</option>
        <option value="SELL">SELL</option>
      </select>
    </div>
    <div class="mb-3">
      <label class="form-label" for="order_type">Order type</label>
      <select class="form-select" id="order_type" name="order_type">
        <option value="MARKET">MARKET</option>
        <option value="LIMIT">LIMIT</option>
        <option value="STOP_LIMIT">STOP_LIMIT</option>
      </select>
    </div>
    <div class="mb-3">
      <label class="form-label" for="quantity">Quantity</label>
      <input class="form-control" id="quantity" name="quantity" inputmode="decimal" required>
    </div>
    <div class="mb-3">
      <label class="form-label" for="price">Price (LIMIT, STOP_LIMIT)</label>
      <input class="form-control" id="price" name="price" inputmode="decimal">
    </div>
    <div class="mb-3">
      <label class="form-label" for="stop_price">Stop price (STOP_LIMIT)</label>
      <input class="form-control" id="stop_price" name="stop_price" inputmode="decimal">
    </div>
    <button class="btn btn-primary" type="submit">Submit order</button>
  </form>
</div>
</body>
</html>
"#
    )
}
