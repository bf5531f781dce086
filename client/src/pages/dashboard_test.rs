use super::*;

#[test]
fn stat_cards_format_counts_and_rate() {
    let stats = UserStats {
        total_users: 12_500,
        new_users_today: 42,
        active_users: 900,
        churn_rate: 2.345,
        ..UserStats::default()
    };
    let cards = stat_cards(&stats);
    let values: Vec<_> = cards.iter().map(|(name, value, _, _)| (*name, value.as_str())).collect();
    assert_eq!(
        values,
        vec![
            ("Total Users", "12.5K"),
            ("New Users Today", "42"),
            ("Active Users", "900"),
            ("Churn Rate", "2.3%"),
        ]
    );
}

#[test]
fn stat_cards_render_zeroes_before_data_arrives() {
    let cards = stat_cards(&UserStats::default());
    assert_eq!(cards[0].1, "0");
    assert_eq!(cards[3].1, "0.0%");
}
