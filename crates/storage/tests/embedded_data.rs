use slam_core::model::{ChampionTable, Tournament, Year};
use storage::{ChampionRepository, Storage};

fn embedded_table() -> ChampionTable {
    let records = Storage::embedded()
        .champions
        .load_champions()
        .expect("embedded data decodes");
    ChampionTable::from_records(records).expect("embedded data covers every pair")
}

#[test]
fn embedded_table_has_one_champion_per_pair() {
    let table = embedded_table();
    assert_eq!(table.len(), Year::COUNT * Tournament::ALL.len());
    assert_eq!(table.len(), 100);
}

#[test]
fn embedded_table_matches_known_champions() {
    let table = embedded_table();
    let year = |y: u16| Year::new(y).unwrap();

    assert_eq!(table.champion(year(2024), Tournament::AustralianOpen), "Jannik Sinner");
    assert_eq!(table.champion(year(2024), Tournament::RolandGarros), "Carlos Alcaraz");
    assert_eq!(table.champion(year(2024), Tournament::Wimbledon), "Carlos Alcaraz");
    assert_eq!(table.champion(year(2024), Tournament::UsOpen), "Jannik Sinner");
    assert_eq!(table.champion(year(2000), Tournament::Wimbledon), "Pete Sampras");
    assert_eq!(table.champion(year(2020), Tournament::Wimbledon), "Not held");
}

#[test]
fn embedded_candidates_are_sorted_and_distinct() {
    let candidates = embedded_table().candidates();
    let mut sorted = candidates.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(candidates, sorted);
    assert!(candidates.iter().any(|name| name == "Roger Federer"));
}

#[test]
fn embedded_title_counts_lead_with_djokovic() {
    let counts = embedded_table().title_counts();
    assert_eq!(counts[0], ("Novak Djokovic".to_string(), 24));
    assert_eq!(counts[1], ("Rafael Nadal".to_string(), 22));
    assert_eq!(counts[2], ("Roger Federer".to_string(), 20));
}
