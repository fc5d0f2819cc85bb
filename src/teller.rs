use tracing::{info, warn};

use crate::models::{Transaction, TransactionKind};

/// A link in the teller chain
///
/// Each handler owns exactly one transaction kind. The chain asks every
/// handler in order whether it accepts a transaction and stops at the first
/// one that does.
pub trait Handler: Send {
    /// Kind of transaction this handler consumes
    fn kind(&self) -> TransactionKind;

    /// Human readable name used in logs and outcomes
    fn name(&self) -> &'static str;

    /// Perform the handler's action on a transaction it accepted
    fn handle(&mut self, tx: &Transaction);

    /// Number of transactions this handler has processed
    fn handled_count(&self) -> usize;

    fn accepts(&self, tx: &Transaction) -> bool {
        tx.kind() == self.kind()
    }
}

/// Result of sending a transaction through the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled {
        kind: TransactionKind,
        handler: &'static str,
    },
    /// No handler in the chain accepted the transaction
    Unhandled { kind: TransactionKind },
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchOutcome::Handled { .. })
    }
}

/// Processes cash withdrawals
#[derive(Debug, Default)]
pub struct WithdrawalHandler {
    handled: usize,
}

impl WithdrawalHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for WithdrawalHandler {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Withdrawal
    }

    fn name(&self) -> &'static str {
        "withdrawal"
    }

    fn handle(&mut self, tx: &Transaction) {
        self.handled += 1;
        info!(kind = %tx.kind(), handler = self.name(), "processing withdrawal");
    }

    fn handled_count(&self) -> usize {
        self.handled
    }
}

/// Processes cash deposits
#[derive(Debug, Default)]
pub struct DepositHandler {
    handled: usize,
}

impl DepositHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for DepositHandler {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Deposit
    }

    fn name(&self) -> &'static str {
        "deposit"
    }

    fn handle(&mut self, tx: &Transaction) {
        self.handled += 1;
        info!(kind = %tx.kind(), handler = self.name(), "processing deposit");
    }

    fn handled_count(&self) -> usize {
        self.handled
    }
}

/// Answers balance queries
#[derive(Debug, Default)]
pub struct BalanceQueryHandler {
    handled: usize,
}

impl BalanceQueryHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for BalanceQueryHandler {
    fn kind(&self) -> TransactionKind {
        TransactionKind::BalanceQuery
    }

    fn name(&self) -> &'static str {
        "balance-query"
    }

    fn handle(&mut self, tx: &Transaction) {
        self.handled += 1;
        info!(kind = %tx.kind(), handler = self.name(), "processing balance query");
    }

    fn handled_count(&self) -> usize {
        self.handled
    }
}

/// Ordered table of handlers, consulted front to back
#[derive(Default)]
pub struct HandlerChain {
    handlers: Vec<Box<dyn Handler>>,
}

impl HandlerChain {
    /// Create a chain with no handlers; every transaction is unhandled
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain
    pub fn with(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// The fixed teller chain: withdrawal, then deposit, then balance query
    pub fn standard() -> Self {
        Self::empty()
            .with(WithdrawalHandler::new())
            .with(DepositHandler::new())
            .with(BalanceQueryHandler::new())
    }

    /// Send a transaction down the chain
    pub fn dispatch(&mut self, tx: &Transaction) -> DispatchOutcome {
        match self.handlers.iter_mut().find(|h| h.accepts(tx)) {
            Some(handler) => {
                handler.handle(tx);
                DispatchOutcome::Handled {
                    kind: tx.kind(),
                    handler: handler.name(),
                }
            }
            None => {
                warn!(kind = %tx.kind(), "no handler accepted transaction");
                DispatchOutcome::Unhandled { kind: tx.kind() }
            }
        }
    }

    /// Handlers in chain order
    pub fn handlers(&self) -> impl Iterator<Item = &dyn Handler> + '_ {
        self.handlers.iter().map(|h| h.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Automated teller front end owning the standard handler chain
pub struct Teller {
    chain: HandlerChain,
}

impl Teller {
    pub fn new() -> Self {
        Self::with_chain(HandlerChain::standard())
    }

    pub fn with_chain(chain: HandlerChain) -> Self {
        Self { chain }
    }

    /// Process a transaction and report which handler took it
    pub fn process(&mut self, tx: Transaction) -> DispatchOutcome {
        self.chain.dispatch(&tx)
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }
}

impl Default for Teller {
    fn default() -> Self {
        Self::new()
    }
}
