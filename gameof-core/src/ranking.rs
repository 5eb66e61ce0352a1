use std::cmp::Ordering;

use gameof_types::Player;

/// Orders players for the results screen: the winner first, everyone else by
/// how few letters they collected. Players tied on letters keep the order in
/// which they joined, which a stable sort gives us for free.
pub fn final_ranking(players: &[Player], winner: Option<&str>) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| compare(a, b, winner));
    ranked
}

fn compare(a: &Player, b: &Player, winner: Option<&str>) -> Ordering {
    let a_won = winner == Some(a.name.as_str());
    let b_won = winner == Some(b.name.as_str());
    match (a_won, b_won) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.letter_count().cmp(&b.letter_count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, letters: &str) -> Player {
        let mut player = Player::new(name);
        player.letters = letters.into();
        player
    }

    fn names(ranked: &[Player]) -> Vec<&str> {
        ranked.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_winner_leads_then_fewest_letters() {
        let players = [player("A", "BIK"), player("B", "B"), player("C", "B")];

        let ranked = final_ranking(&players, Some("B"));
        assert_eq!(names(&ranked), ["B", "C", "A"]);
    }

    #[test]
    fn test_winner_leads_even_with_the_most_letters() {
        let players = [player("A", ""), player("B", "BIKE")];

        let ranked = final_ranking(&players, Some("B"));
        assert_eq!(names(&ranked), ["B", "A"]);
    }

    #[test]
    fn test_without_winner_ranking_is_ascending_letter_count() {
        let players = [player("A", "BIK"), player("B", "BI"), player("C", "")];

        let ranked = final_ranking(&players, None);
        assert_eq!(names(&ranked), ["C", "B", "A"]);
    }

    #[test]
    fn test_ties_keep_join_order() {
        let players = [
            player("first", "BI"),
            player("second", "BI"),
            player("third", "BI"),
        ];

        let ranked = final_ranking(&players, None);
        assert_eq!(names(&ranked), ["first", "second", "third"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // "ÈÈ" is four bytes but two collected letters, so it ranks ahead
        // of the three-letter track.
        let players = [player("A", "ÈÈ"), player("B", "CAF")];

        let ranked = final_ranking(&players, None);
        assert_eq!(names(&ranked), ["A", "B"]);
    }

    #[test]
    fn test_empty_roster_ranks_to_nothing() {
        assert!(final_ranking(&[], None).is_empty());
    }
}
