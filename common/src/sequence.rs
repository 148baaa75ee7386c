//! リクエスト番号管理
//!
//! 発行したリクエストに単調増加の番号（チケット）を付け、
//! 最新のチケット以外の応答は捨てる。

/// 発行済みリクエストの番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
    outstanding: bool,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいチケットを発行する（以前のチケットは無効になる）
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        self.outstanding = true;
        Ticket(self.latest)
    }

    /// 応答を適用してよいか判定し、よければ消費する
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.outstanding && ticket.0 == self.latest {
            self.outstanding = false;
            true
        } else {
            false
        }
    }

    /// 発行済みのチケットをすべて無効にする
    pub fn invalidate(&mut self) {
        self.outstanding = false;
    }
}
