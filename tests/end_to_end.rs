use std::sync::{Arc, Mutex};

use rust_avaliacoes::damage_map::{DamageMap, View};
use rust_avaliacoes::filter::EvaluationFilter;
use rust_avaliacoes::models::{EvaluationPatch, EvaluationRecord};
use rust_avaliacoes::persistence::{EvaluationRepository, LocalRepository};
use rust_avaliacoes::sheet::{EvaluationSheet, ListEntry, NOT_AVAILABLE, SOLD_BANNER};
use rust_avaliacoes::store::EvaluationStore;

fn repository(dir: &tempfile::TempDir) -> LocalRepository {
    LocalRepository::new(dir.path().join("data/avaliacoes.json"))
}

#[tokio::test]
async fn test_required_only_record_lists_once_and_renders_na() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let record = EvaluationRecord::new("2024-05-02", "Fernanda Lima", "HB20", "Carlos");
    record.validate().unwrap();
    let created = repo.create(record).await.unwrap();

    let mut store = EvaluationStore::new();
    store.load(repo.list().await.unwrap());
    let listed = EvaluationFilter::default().apply(store.records());
    assert_eq!(listed.len(), 1);

    let entry = ListEntry::from_record(&listed[0]);
    assert_eq!(entry.model, "HB20");
    assert_eq!(entry.client, "Fernanda Lima");
    assert_eq!(entry.id, created.id);

    let sheet = EvaluationSheet::from_record(&listed[0]);
    let client = sheet.section("DADOS DO CLIENTE").unwrap();
    for label in ["Celular", "Cidade", "Por onde veio", "Endereço"] {
        assert_eq!(client.field(label), Some(NOT_AVAILABLE), "{}", label);
    }
    let vehicle = sheet.section("DADOS DO VEÍCULO").unwrap();
    for label in ["Ano", "Versão", "Motor", "Placa", "KM", "FIPE"] {
        assert_eq!(vehicle.field(label), Some(NOT_AVAILABLE), "{}", label);
    }
    let docs = sheet.section("DOCUMENTAÇÃO").unwrap();
    for label in [
        "Em Nome de",
        "Valor Quitação",
        "Débitos DETRAN",
        "Histórico KM",
    ] {
        assert_eq!(docs.field(label), Some(NOT_AVAILABLE), "{}", label);
    }
    assert!(sheet.section("STATUS DE VENDA").is_none());
    assert!(sheet.section("MAPA DE DANOS").is_none());
}

#[tokio::test]
async fn test_damage_selection_survives_view_switch_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let latest: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&latest);
    let mut map = DamageMap::new(Vec::<String>::new()).with_listener(move |selection| {
        *sink.lock().unwrap() = selection.to_vec();
    });

    assert_eq!(map.view(), View::Side);
    map.toggle("capo");
    map.toggle("porta-dianteira");
    map.select_view(View::Front);

    let mut ids = map.serialize();
    ids.sort();
    assert_eq!(ids, vec!["capo", "porta-dianteira"]);
    let mut notified = latest.lock().unwrap().clone();
    notified.sort();
    assert_eq!(notified, ids);

    let mut record = EvaluationRecord::new("2024-05-02", "Rafael", "Corolla", "Bruna");
    record.danos_mapeados = map.serialize();
    let created = repo.create(record).await.unwrap();

    let stored = repo
        .get_by_id(created.id.as_deref().unwrap())
        .await
        .unwrap()
        .unwrap();
    let reloaded = DamageMap::new(stored.danos_mapeados.clone());
    assert!(reloaded.is_selected("capo"));
    assert!(reloaded.is_selected("porta-dianteira"));

    let sheet = EvaluationSheet::from_record(&stored);
    let damages = sheet.section("MAPA DE DANOS").unwrap();
    assert_eq!(damages.fields.len(), 2);
}

#[tokio::test]
async fn test_sold_without_details_shows_banner_only() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let created = repo
        .create(EvaluationRecord::new("2024-05-02", "Paula", "Renegade", "Carlos"))
        .await
        .unwrap();
    let id = created.id.clone().unwrap();
    repo.update(&id, &EvaluationPatch::sale(true, None, None))
        .await
        .unwrap();

    let stored = repo.get_by_id(&id).await.unwrap().unwrap();
    let sheet = EvaluationSheet::from_record(&stored);
    assert!(sheet.is_sold());

    let sale = sheet.section("STATUS DE VENDA").unwrap();
    assert_eq!(sale.banner, Some(SOLD_BANNER));
    assert!(sale.fields.is_empty());

    let text = sheet.render_text();
    assert!(text.contains(SOLD_BANNER));
    assert!(!text.contains("Data da Venda"));
    assert!(!text.contains("Valor da Venda"));
}
