//! 画像スライダーの状態管理
//!
//! 現在位置は常に `[0, total)` に収まる（全遷移で剰余を取る）。

/// スライダーへの入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    Next,
    Prev,
    GoTo(usize),
}

impl CarouselInput {
    /// キーボード入力の対応付け（左右矢印のみ）
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(CarouselInput::Prev),
            "ArrowRight" => Some(CarouselInput::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    /// スライドが1枚もない場合は `None`
    pub fn new(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.total;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.total - 1) % self.total;
        self.current
    }

    /// 指定位置へ移動（範囲外は剰余で丸める）
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index % self.total;
        self.current
    }

    pub fn apply(&mut self, input: CarouselInput) -> usize {
        match input {
            CarouselInput::Next => self.next(),
            CarouselInput::Prev => self.prev(),
            CarouselInput::GoTo(index) => self.go_to(index),
        }
    }

    /// トラックの transform 値
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        index == self.current
    }
}
