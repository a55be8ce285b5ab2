use std::fmt;

/// Binary operator in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
}

impl BinOp {
    /// Binding strength: multiplicative operators bind tighter than
    /// additive ones.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Operator symbol as written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression tree node.
///
/// Every well-formed expression is either an integer literal or a
/// binary operation over two owned subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Literal { value: i64 },
    /// Binary operation with owned operands.
    Binary {
        op: BinOp,
        left: Box<Self>,
        right: Box<Self>,
    },
}

impl Expr {
    /// Literal node.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Binary node over two owned subtrees.
    #[must_use]
    pub fn binary(op: BinOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `left + right`.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::binary(BinOp::Add, left, right)
    }

    /// `left - right`.
    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::binary(BinOp::Sub, left, right)
    }

    /// `left * right`.
    #[must_use]
    pub fn mul(left: Self, right: Self) -> Self {
        Self::binary(BinOp::Mul, left, right)
    }

    /// `left / right`.
    #[must_use]
    pub fn div(left: Self, right: Self) -> Self {
        Self::binary(BinOp::Div, left, right)
    }
}
