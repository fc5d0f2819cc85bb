use std::fmt;

/// Type of teller transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Withdrawal,
    Deposit,
    BalanceQuery,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Withdrawal,
        TransactionKind::Deposit,
        TransactionKind::BalanceQuery,
    ];
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Deposit => "deposit",
            TransactionKind::BalanceQuery => "balance query",
        };
        f.write_str(name)
    }
}

/// Teller request, read-only after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(kind: TransactionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}
