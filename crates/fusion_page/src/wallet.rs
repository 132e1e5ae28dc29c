//! Wallet and swap collaborators
//!
//! Wallet connection and token swapping belong to an external SDK. The page
//! only asks whether a wallet is connected and, if so, hands the token
//! descriptor to a swap widget unmodified.

use fusion_content::TokenDescriptor;
use fusion_layout::element::{div, span, Element};

/// Wallet connection status provider
pub trait WalletConnector: Send {
    fn is_connected(&self) -> bool;

    /// Connected account address
    fn address(&self) -> Option<&str>;
}

/// Renders the embedded swap interface for a token
pub trait SwapWidget: Send {
    fn render(&self, token: &TokenDescriptor) -> Element;
}

/// Wallet with a fixed connection state
#[derive(Clone, Debug, Default)]
pub struct StaticWallet {
    address: Option<String>,
}

impl StaticWallet {
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self { address: None }
    }
}

impl WalletConnector for StaticWallet {
    fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Mount point for the external swap SDK
///
/// Emits a placeholder element carrying the token descriptor as JSON for the
/// SDK to pick up on the client.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedSwapWidget;

impl SwapWidget for EmbeddedSwapWidget {
    fn render(&self, token: &TokenDescriptor) -> Element {
        let descriptor = match serde_json::to_string(token) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize token descriptor");
                String::new()
            }
        };
        div()
            .class("swap-widget")
            .attr("data-widget", "buy")
            .attr("data-token", descriptor)
            .child(span(format!("Swap for {}", token.symbol)))
    }
}

/// Connect-wallet widget mount point, showing the short address when connected
pub fn wallet_widget(wallet: &dyn WalletConnector) -> Element {
    let label = match wallet.address() {
        Some(address) if wallet.is_connected() => short_address(address),
        _ => "Connect Wallet".to_string(),
    };
    div()
        .class("wallet-connect")
        .attr("data-widget", "wallet")
        .attr("data-connected", wallet.is_connected().to_string())
        .child(span(label))
}

/// `0x4ed4e862...efed` -> `0x4ed4...efed`
pub fn short_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TokenDescriptor {
        TokenDescriptor {
            name: "Quantum Fusion".into(),
            address: "0x4ed4e862860bed51a9570b96d89af5e1b0efefed".into(),
            symbol: "QF".into(),
            decimals: 18,
            image: "https://example.com/qf.png".into(),
            chain_id: 8453,
        }
    }

    #[test]
    fn test_swap_widget_passes_descriptor_through() {
        let el = EmbeddedSwapWidget.render(&token());
        let json = el.get_attr("data-token").expect("descriptor attribute");
        let parsed: TokenDescriptor = serde_json::from_str(json).expect("valid json");
        assert_eq!(parsed, token());
    }

    #[test]
    fn test_static_wallet() {
        let wallet = StaticWallet::connected("0xabc");
        assert!(wallet.is_connected());
        assert_eq!(wallet.address(), Some("0xabc"));
        assert!(!StaticWallet::disconnected().is_connected());
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x4ed4e862860bed51a9570b96d89af5e1b0efefed"),
            "0x4ed4...efed"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_wallet_widget_label() {
        let connected = wallet_widget(&StaticWallet::connected(
            "0x4ed4e862860bed51a9570b96d89af5e1b0efefed",
        ));
        assert_eq!(connected.inner_text(), "0x4ed4...efed");
        assert_eq!(
            wallet_widget(&StaticWallet::disconnected()).inner_text(),
            "Connect Wallet"
        );
    }
}
