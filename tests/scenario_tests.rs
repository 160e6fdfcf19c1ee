//! End-to-end scenarios on real deals.

use klondike_console::card::{Card, Rank, Suit};
use klondike_console::command::{Command, parse_line};
use klondike_console::deck::{CardSource, Deck};
use klondike_console::error::DeckError;
use klondike_console::game::Game;
use klondike_console::pile::PileId;

fn fresh_game() -> Game {
    let mut game = Game::new();
    game.deal(&mut Deck::new(false)).unwrap();
    game
}

fn run(game: &mut Game, line: &str) -> Vec<bool> {
    parse_line(line)
        .unwrap()
        .into_iter()
        .map(|c| game.dispatch(c))
        .collect()
}

#[test]
fn unshuffled_deal_layout() {
    let game = fresh_game();
    let t6 = game.pile(PileId::Tableau(6));
    assert_eq!(t6.len(), 7);
    assert!(t6.cards()[..6].iter().all(|c| c.is_face_down()));
    assert!(t6.cards()[6].is_face_up());
    assert_eq!(game.stock().len(), 52 - (1..=7).sum::<usize>());
    assert_eq!(game.stock().len(), 24);
}

#[test]
fn re_choosing_the_source_puts_the_card_back() {
    let mut game = fresh_game();
    let before = game.clone();
    assert!(game.dispatch(Command::Tableau { index: 3, count: 1 }));
    assert!(game.has_pick());
    assert!(game.dispatch(Command::Tableau { index: 3, count: 1 }));
    assert!(!game.has_pick());
    assert_eq!(game, before);
}

#[test]
fn stock_draw_moves_one_card() {
    let mut game = fresh_game();
    let stock = game.stock().len();
    assert!(game.dispatch(Command::Stock));
    assert_eq!(game.stock().len(), stock - 1);
    assert_eq!(game.discards().len(), 1);
    let top = game.discards().top().unwrap();
    assert!(top.is_face_up());
    assert!(top.same_card(Card::new(Suit::Clubs, Rank::Ace)));
}

#[test]
fn opening_moves_on_the_unshuffled_deal() {
    // T5 shows A_H; moving it exposes 3_H.
    let mut game = fresh_game();
    assert_eq!(run(&mut game, "t5;f1"), vec![true, true]);
    let t5 = game.pile(PileId::Tableau(5));
    assert_eq!(t5.len(), 5);
    assert!(t5.top().unwrap().same_card(Card::new(Suit::Hearts, Rank::Three)));
    assert!(t5.top().unwrap().is_face_up());

    // A_C and 2_C come straight off the stock.
    assert_eq!(run(&mut game, "s;d;f0;s;d;f0"), vec![true; 6]);
    assert_eq!(game.pile(PileId::Foundation(0)).len(), 2);

    // 3_C cannot start a pile, nor go onto A_H.
    assert_eq!(run(&mut game, "s;d;f2;f1"), vec![true, true, false, false]);
    assert!(game.has_pick());
    assert_eq!(run(&mut game, "d"), vec![true]);
    assert!(!game.has_pick());
}

#[test]
fn cycling_the_whole_stock_restores_it() {
    let mut game = fresh_game();
    let original = game.stock().clone();
    for _ in 0..24 {
        assert!(game.dispatch(Command::Stock));
    }
    assert!(game.stock().is_empty());
    assert_eq!(game.discards().len(), 24);
    assert!(game.dispatch(Command::Stock), "restock");
    assert_eq!(game.stock(), &original);
    assert!(game.discards().is_empty());
}

#[test]
fn selecting_from_hidden_cards_is_always_rejected() {
    let mut game = fresh_game();
    for count in [-1, 0, 2, 3, 7, 8] {
        assert!(!game.dispatch(Command::Tableau { index: 6, count }), "count {count}");
        assert!(!game.has_pick());
    }
}

/// A source that hands out a fixed list, to exercise the trait seam.
struct Scripted(Vec<Card>);

impl CardSource for Scripted {
    fn deal(&mut self) -> Result<Card, DeckError> {
        self.0.pop().ok_or(DeckError::Exhausted)
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

#[test]
fn any_card_source_can_deal() {
    let cards: Vec<Card> = Deck::new(false).deal_order().collect();
    let mut source = Scripted(cards.into_iter().rev().collect());
    let mut game = Game::new();
    game.deal(&mut source).unwrap();
    assert_eq!(game, fresh_game());

    let mut short = Scripted(vec![Card::new(Suit::Clubs, Rank::Two); 10]);
    assert_eq!(game.deal(&mut short), Err(DeckError::Exhausted));
}
