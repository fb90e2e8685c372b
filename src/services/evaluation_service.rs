use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tonic::{Request, Response, Status};

use crate::damage_map::{all_regions, region_name, regions_for, View};
use crate::error::AppError;
use crate::filter::{EvaluationFilter, SoldStatus};
use crate::models::{EvaluationPatch, EvaluationRecord};
use crate::persistence::EvaluationRepository;
use crate::proto::common::Empty;
use crate::proto::evaluations::evaluation_service_server::EvaluationService;
use crate::proto::evaluations::{
    CreateEvaluationRequest, CsvExportResponse, DamageRegion, DateRangeRequest,
    DeleteEvaluationRequest, DescribeDamagesRequest, DescribeDamagesResponse, Evaluation,
    EvaluationResponse, GetEvaluationRequest, ListDamageRegionsRequest,
    ListDamageRegionsResponse, ListEvaluationsRequest, ListEvaluationsResponse, ModelCount,
    RenderEvaluationRequest, RenderEvaluationResponse, ReportResponse, SetSaleStatusRequest,
    UpdateEvaluationRequest,
};
use crate::report::{export_csv, export_file_name, summarize_range, DateRange};
use crate::sheet::EvaluationSheet;
use crate::store::EvaluationStore;

fn opt(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn required_id(id: &str) -> Result<&str, Status> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Status::invalid_argument("id is required"));
    }
    Ok(id)
}

pub struct EvaluationServiceImpl {
    repository: Arc<dyn EvaluationRepository>,
    store: Arc<RwLock<EvaluationStore>>,
    // one backend listing at a time; later callers wait for it
    reload: Mutex<()>,
}

impl EvaluationServiceImpl {
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(RwLock::new(EvaluationStore::new())),
            reload: Mutex::new(()),
        }
    }

    pub fn model_to_proto(record: &EvaluationRecord) -> Evaluation {
        Evaluation {
            id: record.id.clone().unwrap_or_default(),
            created_at: record.created_at.clone().unwrap_or_default(),
            data_avaliacao: record.data_avaliacao.clone(),
            cliente_nome: record.cliente_nome.clone(),
            cliente_celular: record.cliente_celular.clone().unwrap_or_default(),
            cliente_endereco: record.cliente_endereco.clone().unwrap_or_default(),
            cliente_cidade: record.cliente_cidade.clone().unwrap_or_default(),
            cliente_origem: record.cliente_origem.clone().unwrap_or_default(),
            veiculo_modelo: record.veiculo_modelo.clone(),
            veiculo_ano: record.veiculo_ano.clone().unwrap_or_default(),
            veiculo_versao: record.veiculo_versao.clone().unwrap_or_default(),
            veiculo_motor: record.veiculo_motor.clone().unwrap_or_default(),
            veiculo_placa: record.veiculo_placa.clone().unwrap_or_default(),
            veiculo_km: record.veiculo_km.clone().unwrap_or_default(),
            veiculo_fipe: record.veiculo_fipe.clone().unwrap_or_default(),
            veiculo_manual: record.veiculo_manual,
            veiculo_chave_copia: record.veiculo_chave_copia,
            veiculo_sinistro: record.veiculo_sinistro,
            veiculo_leilao: record.veiculo_leilao,
            veiculo_batido: record.veiculo_batido,
            veiculo_obs: record.veiculo_obs.clone().unwrap_or_default(),
            doc_nome_proprietario: record.doc_nome_proprietario.clone().unwrap_or_default(),
            doc_financiamento: record.doc_financiamento,
            doc_valor_quitacao: record.doc_valor_quitacao.clone().unwrap_or_default(),
            doc_debitos_detran: record.doc_debitos_detran.clone().unwrap_or_default(),
            doc_historico_km: record.doc_historico_km.clone().unwrap_or_default(),
            aval_lataria: record.aval_lataria.clone().unwrap_or_default(),
            aval_motor: record.aval_motor.clone().unwrap_or_default(),
            aval_suspensao: record.aval_suspensao.clone().unwrap_or_default(),
            aval_luzes_painel: record.aval_luzes_painel.clone().unwrap_or_default(),
            aval_parabrisa: record.aval_parabrisa.clone().unwrap_or_default(),
            aval_ar_condicionado: record.aval_ar_condicionado.clone().unwrap_or_default(),
            aval_pneus: record.aval_pneus.clone().unwrap_or_default(),
            aval_interna: record.aval_interna.clone().unwrap_or_default(),
            avaliador_nome: record.avaliador_nome.clone(),
            vendido: record.vendido,
            data_venda: record.data_venda.clone().unwrap_or_default(),
            valor_venda: record.valor_venda.clone().unwrap_or_default(),
            fotos: record.fotos.clone(),
            danos_mapeados: record.danos_mapeados.clone(),
        }
    }

    pub fn proto_to_model(evaluation: Evaluation) -> EvaluationRecord {
        EvaluationRecord {
            id: opt(evaluation.id),
            created_at: opt(evaluation.created_at),
            data_avaliacao: evaluation.data_avaliacao.trim().to_string(),
            cliente_nome: evaluation.cliente_nome,
            cliente_celular: opt(evaluation.cliente_celular),
            cliente_endereco: opt(evaluation.cliente_endereco),
            cliente_cidade: opt(evaluation.cliente_cidade),
            cliente_origem: opt(evaluation.cliente_origem),
            veiculo_modelo: evaluation.veiculo_modelo,
            veiculo_ano: opt(evaluation.veiculo_ano),
            veiculo_versao: opt(evaluation.veiculo_versao),
            veiculo_motor: opt(evaluation.veiculo_motor),
            veiculo_placa: opt(evaluation.veiculo_placa),
            veiculo_km: opt(evaluation.veiculo_km),
            veiculo_fipe: opt(evaluation.veiculo_fipe),
            veiculo_manual: evaluation.veiculo_manual,
            veiculo_chave_copia: evaluation.veiculo_chave_copia,
            veiculo_sinistro: evaluation.veiculo_sinistro,
            veiculo_leilao: evaluation.veiculo_leilao,
            veiculo_batido: evaluation.veiculo_batido,
            veiculo_obs: opt(evaluation.veiculo_obs),
            doc_nome_proprietario: opt(evaluation.doc_nome_proprietario),
            doc_financiamento: evaluation.doc_financiamento,
            doc_valor_quitacao: opt(evaluation.doc_valor_quitacao),
            doc_debitos_detran: opt(evaluation.doc_debitos_detran),
            doc_historico_km: opt(evaluation.doc_historico_km),
            aval_lataria: opt(evaluation.aval_lataria),
            aval_motor: opt(evaluation.aval_motor),
            aval_suspensao: opt(evaluation.aval_suspensao),
            aval_luzes_painel: opt(evaluation.aval_luzes_painel),
            aval_parabrisa: opt(evaluation.aval_parabrisa),
            aval_ar_condicionado: opt(evaluation.aval_ar_condicionado),
            aval_pneus: opt(evaluation.aval_pneus),
            aval_interna: opt(evaluation.aval_interna),
            avaliador_nome: evaluation.avaliador_nome,
            vendido: evaluation.vendido,
            data_venda: opt(evaluation.data_venda),
            valor_venda: opt(evaluation.valor_venda),
            fotos: evaluation.fotos,
            danos_mapeados: evaluation.danos_mapeados,
        }
    }

    /// Reloads the cached collection from the backend. Concurrent callers
    /// queue behind the listing in progress. A cancelled caller releases the
    /// queue when its future is dropped.
    async fn refresh(&self) -> Result<(), Status> {
        let _reload = self.reload.lock().await;
        let records = self.repository.list().await?;
        self.store.write().await.load(records);
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<EvaluationRecord, Status> {
        let record = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("avaliação {}", id)))?;
        Ok(record)
    }

    fn date_range(req: &DateRangeRequest) -> Result<DateRange, Status> {
        DateRange::parse(&req.from, &req.to).map_err(|e| AppError::InvalidInput(e).into())
    }
}

#[tonic::async_trait]
impl EvaluationService for EvaluationServiceImpl {
    async fn create_evaluation(
        &self,
        request: Request<CreateEvaluationRequest>,
    ) -> Result<Response<EvaluationResponse>, Status> {
        let evaluation = request
            .into_inner()
            .evaluation
            .ok_or_else(|| Status::invalid_argument("evaluation is required"))?;

        let record = EvaluationRecord {
            id: None,
            created_at: None,
            ..Self::proto_to_model(evaluation)
        };
        record.validate()?;

        let created = self.repository.create(record).await?;
        self.store.write().await.append(created.clone());

        Ok(Response::new(EvaluationResponse {
            evaluation: Some(Self::model_to_proto(&created)),
        }))
    }

    async fn get_evaluation(
        &self,
        request: Request<GetEvaluationRequest>,
    ) -> Result<Response<EvaluationResponse>, Status> {
        let req = request.into_inner();
        let record = self.fetch(required_id(&req.id)?).await?;
        Ok(Response::new(EvaluationResponse {
            evaluation: Some(Self::model_to_proto(&record)),
        }))
    }

    async fn list_evaluations(
        &self,
        request: Request<ListEvaluationsRequest>,
    ) -> Result<Response<ListEvaluationsResponse>, Status> {
        let req = request.into_inner();
        let filter = EvaluationFilter {
            search: req.search,
            year: req.year,
            model: req.model,
            evaluator: req.evaluator,
            sold: SoldStatus::parse(&req.sold),
        };

        self.refresh().await?;
        let store = self.store.read().await;
        let evaluations = filter
            .apply(store.records())
            .iter()
            .map(Self::model_to_proto)
            .collect();

        Ok(Response::new(ListEvaluationsResponse {
            evaluations,
            total_loaded: store.len() as i32,
            filter_active: filter.is_active(),
        }))
    }

    async fn update_evaluation(
        &self,
        request: Request<UpdateEvaluationRequest>,
    ) -> Result<Response<EvaluationResponse>, Status> {
        let req = request.into_inner();
        let id = required_id(&req.id)?;
        let evaluation = req
            .evaluation
            .ok_or_else(|| Status::invalid_argument("evaluation is required"))?;

        let record = Self::proto_to_model(evaluation);
        record.validate()?;

        self.repository.replace(id, &record).await?;
        let updated = self.fetch(id).await?;
        self.store.write().await.replace(id, updated.clone());

        Ok(Response::new(EvaluationResponse {
            evaluation: Some(Self::model_to_proto(&updated)),
        }))
    }

    async fn set_sale_status(
        &self,
        request: Request<SetSaleStatusRequest>,
    ) -> Result<Response<EvaluationResponse>, Status> {
        let req = request.into_inner();
        let id = required_id(&req.id)?;
        let patch = EvaluationPatch::sale(req.vendido, opt(req.data_venda), opt(req.valor_venda));
        patch.validate()?;

        self.repository.update(id, &patch).await?;
        self.store.write().await.update(id, &patch);
        let updated = self.fetch(id).await?;

        Ok(Response::new(EvaluationResponse {
            evaluation: Some(Self::model_to_proto(&updated)),
        }))
    }

    async fn delete_evaluation(
        &self,
        request: Request<DeleteEvaluationRequest>,
    ) -> Result<Response<Empty>, Status> {
        let req = request.into_inner();
        let id = required_id(&req.id)?;

        self.repository.delete(id).await?;
        self.store.write().await.remove(id);

        Ok(Response::new(Empty {}))
    }

    async fn render_evaluation(
        &self,
        request: Request<RenderEvaluationRequest>,
    ) -> Result<Response<RenderEvaluationResponse>, Status> {
        let req = request.into_inner();
        let record = self.fetch(required_id(&req.id)?).await?;
        let text = EvaluationSheet::from_record(&record).render_text();

        Ok(Response::new(RenderEvaluationResponse { text }))
    }

    async fn get_report(
        &self,
        request: Request<DateRangeRequest>,
    ) -> Result<Response<ReportResponse>, Status> {
        let range = Self::date_range(request.get_ref())?;

        self.refresh().await?;
        let summary = summarize_range(self.store.read().await.records(), &range);

        Ok(Response::new(ReportResponse {
            total: summary.total as i32,
            unique_models: summary.unique_models as i32,
            unique_evaluators: summary.unique_evaluators as i32,
            unique_clients: summary.unique_clients as i32,
            top_models: summary
                .top_models
                .into_iter()
                .map(|(model, count)| ModelCount {
                    model,
                    count: count as i32,
                })
                .collect(),
        }))
    }

    async fn export_csv(
        &self,
        request: Request<DateRangeRequest>,
    ) -> Result<Response<CsvExportResponse>, Status> {
        let range = Self::date_range(request.get_ref())?;

        self.refresh().await?;
        let content = {
            let store = self.store.read().await;
            export_csv(&range.apply(store.records()))
        };

        Ok(Response::new(CsvExportResponse {
            file_name: export_file_name(Utc::now().date_naive()),
            content,
        }))
    }

    async fn list_damage_regions(
        &self,
        request: Request<ListDamageRegionsRequest>,
    ) -> Result<Response<ListDamageRegionsResponse>, Status> {
        let req = request.into_inner();
        let to_proto = |view: View, region: &crate::damage_map::Region| DamageRegion {
            id: region.id.to_string(),
            display_name: region.display_name.to_string(),
            shape: region.shape.to_string(),
            view: view.as_str().to_string(),
        };

        let regions = if req.view.trim().is_empty() {
            all_regions().map(|(view, region)| to_proto(view, region)).collect()
        } else {
            let view = View::parse(&req.view).ok_or_else(|| {
                Status::from(AppError::InvalidInput(format!("unknown view: {}", req.view)))
            })?;
            regions_for(view)
                .iter()
                .map(|region| to_proto(view, region))
                .collect()
        };

        Ok(Response::new(ListDamageRegionsResponse { regions }))
    }

    async fn describe_damages(
        &self,
        request: Request<DescribeDamagesRequest>,
    ) -> Result<Response<DescribeDamagesResponse>, Status> {
        let names = request
            .into_inner()
            .region_ids
            .iter()
            .map(|id| region_name(id).to_string())
            .collect();

        Ok(Response::new(DescribeDamagesResponse { names }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::persistence::LocalRepository;
    use std::time::Duration;
    use tonic::Code;

    /// Local backend whose listing takes `delay` to answer.
    struct SlowRepository {
        inner: Arc<LocalRepository>,
        delay: Duration,
    }

    #[tonic::async_trait]
    impl EvaluationRepository for SlowRepository {
        async fn create(&self, record: EvaluationRecord) -> AppResult<EvaluationRecord> {
            self.inner.create(record).await
        }

        async fn list(&self) -> AppResult<Vec<EvaluationRecord>> {
            tokio::time::sleep(self.delay).await;
            self.inner.list().await
        }

        async fn get_by_id(&self, id: &str) -> AppResult<Option<EvaluationRecord>> {
            self.inner.get_by_id(id).await
        }

        async fn update(&self, id: &str, patch: &EvaluationPatch) -> AppResult<()> {
            self.inner.update(id, patch).await
        }

        async fn replace(&self, id: &str, record: &EvaluationRecord) -> AppResult<()> {
            self.inner.replace(id, record).await
        }

        async fn delete(&self, id: &str) -> AppResult<()> {
            self.inner.delete(id).await
        }

        fn backend_name(&self) -> &'static str {
            "slow"
        }
    }

    fn slow_service(dir: &tempfile::TempDir) -> (Arc<LocalRepository>, EvaluationServiceImpl) {
        let inner = Arc::new(LocalRepository::new(dir.path().join("avaliacoes.json")));
        let repository = Arc::new(SlowRepository {
            inner: Arc::clone(&inner),
            delay: Duration::from_millis(60),
        });
        (inner, EvaluationServiceImpl::new(repository))
    }

    fn service(dir: &tempfile::TempDir) -> EvaluationServiceImpl {
        let repository = Arc::new(LocalRepository::new(dir.path().join("avaliacoes.json")));
        EvaluationServiceImpl::new(repository)
    }

    fn evaluation(cliente: &str, modelo: &str, date: &str) -> Evaluation {
        Evaluation {
            data_avaliacao: date.to_string(),
            cliente_nome: cliente.to_string(),
            veiculo_modelo: modelo.to_string(),
            avaliador_nome: "Carlos".to_string(),
            ..Default::default()
        }
    }

    async fn create(svc: &EvaluationServiceImpl, e: Evaluation) -> Evaluation {
        svc.create_evaluation(Request::new(CreateEvaluationRequest {
            evaluation: Some(e),
        }))
        .await
        .unwrap()
        .into_inner()
        .evaluation
        .unwrap()
    }

    #[test]
    fn test_proto_conversion_maps_empty_to_none() {
        let mut proto = evaluation("Maria", "Onix", "2024-03-10");
        proto.veiculo_placa = "ABC1D23".to_string();
        proto.cliente_celular = "  ".to_string();
        let record = EvaluationServiceImpl::proto_to_model(proto.clone());
        assert_eq!(record.id, None);
        assert_eq!(record.cliente_celular, None);
        assert_eq!(record.veiculo_placa.as_deref(), Some("ABC1D23"));

        let back = EvaluationServiceImpl::model_to_proto(&record);
        assert_eq!(back.veiculo_placa, "ABC1D23");
        assert_eq!(back.cliente_celular, "");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_before_backend() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let status = svc
            .create_evaluation(Request::new(CreateEvaluationRequest {
                evaluation: Some(evaluation("", "", "2024-03-10")),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("cliente_nome"));
        assert!(status.message().contains("veiculo_modelo"));
        assert!(!dir.path().join("avaliacoes.json").exists());
    }

    #[tokio::test]
    async fn test_cancelled_reload_does_not_block_later_lists() {
        let dir = tempfile::tempdir().unwrap();
        let (inner, svc) = slow_service(&dir);

        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            svc.list_evaluations(Request::new(ListEvaluationsRequest::default())),
        )
        .await;
        assert!(cancelled.is_err());

        inner
            .create(EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos"))
            .await
            .unwrap();

        let listed = svc
            .list_evaluations(Request::new(ListEvaluationsRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(listed.total_loaded, 1);
        assert_eq!(listed.evaluations.len(), 1);

        let report = svc
            .get_report(Request::new(DateRangeRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(report.total, 1);
    }

    #[tokio::test]
    async fn test_concurrent_lists_wait_for_the_reload() {
        let dir = tempfile::tempdir().unwrap();
        let (inner, svc) = slow_service(&dir);
        inner
            .create(EvaluationRecord::new("2024-03-10", "Maria", "Onix", "Carlos"))
            .await
            .unwrap();

        let (a, b) = tokio::join!(
            svc.list_evaluations(Request::new(ListEvaluationsRequest::default())),
            svc.list_evaluations(Request::new(ListEvaluationsRequest::default())),
        );
        assert_eq!(a.unwrap().into_inner().evaluations.len(), 1);
        assert_eq!(b.unwrap().into_inner().evaluations.len(), 1);
    }

    #[tokio::test]
    async fn test_create_keeps_cached_list_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        create(&svc, evaluation("Maria", "Onix", "2024-03-10")).await;
        svc.list_evaluations(Request::new(ListEvaluationsRequest::default()))
            .await
            .unwrap();

        create(&svc, evaluation("João", "Gol", "2024-03-11")).await;
        let store = svc.store.read().await;
        let clients: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.cliente_nome.as_str())
            .collect();
        assert_eq!(clients, vec!["João", "Maria"]);
    }

    #[tokio::test]
    async fn test_create_rejects_unparseable_date() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let status = svc
            .create_evaluation(Request::new(CreateEvaluationRequest {
                evaluation: Some(evaluation("Maria", "Onix", "15/01/2024")),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("data_avaliacao"));
        assert!(!dir.path().join("avaliacoes.json").exists());
    }

    #[tokio::test]
    async fn test_sale_status_rejects_bad_sale_date() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let created = create(&svc, evaluation("Maria", "Onix", "2024-03-10")).await;

        let status = svc
            .set_sale_status(Request::new(SetSaleStatusRequest {
                id: created.id.clone(),
                vendido: true,
                data_venda: "amanhã".to_string(),
                valor_venda: String::new(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        let stored = svc
            .get_evaluation(Request::new(GetEvaluationRequest { id: created.id }))
            .await
            .unwrap()
            .into_inner()
            .evaluation
            .unwrap();
        assert!(!stored.vendido);
    }

    #[tokio::test]
    async fn test_create_list_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        create(&svc, evaluation("Maria", "Onix", "2024-03-10")).await;
        create(&svc, evaluation("João", "Gol", "2024-03-11")).await;

        let all = svc
            .list_evaluations(Request::new(ListEvaluationsRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(all.total_loaded, 2);
        assert!(!all.filter_active);
        assert_eq!(all.evaluations[0].cliente_nome, "João");

        let filtered = svc
            .list_evaluations(Request::new(ListEvaluationsRequest {
                search: "onix".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(filtered.filter_active);
        assert_eq!(filtered.evaluations.len(), 1);
        assert_eq!(filtered.evaluations[0].cliente_nome, "Maria");
    }

    #[tokio::test]
    async fn test_sale_status_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let created = create(&svc, evaluation("Maria", "Onix", "2024-03-10")).await;

        let sold = svc
            .set_sale_status(Request::new(SetSaleStatusRequest {
                id: created.id.clone(),
                vendido: true,
                data_venda: String::new(),
                valor_venda: "R$ 48.000".to_string(),
            }))
            .await
            .unwrap()
            .into_inner()
            .evaluation
            .unwrap();
        assert!(sold.vendido);
        assert_eq!(sold.valor_venda, "R$ 48.000");
        assert_eq!(sold.cliente_nome, "Maria");

        svc.delete_evaluation(Request::new(DeleteEvaluationRequest {
            id: created.id.clone(),
        }))
        .await
        .unwrap();
        let status = svc
            .get_evaluation(Request::new(GetEvaluationRequest { id: created.id }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let created = create(&svc, evaluation("Maria", "Onix", "2024-03-10")).await;

        let mut edited = created.clone();
        edited.veiculo_modelo = "Onix Plus".to_string();
        edited.aval_pneus = "Novos".to_string();
        let updated = svc
            .update_evaluation(Request::new(UpdateEvaluationRequest {
                id: created.id.clone(),
                evaluation: Some(edited),
            }))
            .await
            .unwrap()
            .into_inner()
            .evaluation
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.veiculo_modelo, "Onix Plus");
        assert_eq!(updated.aval_pneus, "Novos");
        assert_eq!(updated.created_at, created.created_at);

        let status = svc
            .update_evaluation(Request::new(UpdateEvaluationRequest {
                id: "missing".to_string(),
                evaluation: Some(evaluation("Ana", "Kwid", "2024-03-12")),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_report_and_csv_respect_range() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        create(&svc, evaluation("Maria", "Onix", "2024-01-15")).await;
        create(&svc, evaluation("João", "Onix", "2024-02-20")).await;
        create(&svc, evaluation("Ana", "Gol", "2024-03-05")).await;

        let report = svc
            .get_report(Request::new(DateRangeRequest {
                from: "2024-02-01".to_string(),
                to: String::new(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(report.total, 2);
        assert_eq!(report.unique_models, 2);

        let csv = svc
            .export_csv(Request::new(DateRangeRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert!(csv.file_name.starts_with("relatorio_avaliacoes_"));
        assert_eq!(csv.content.lines().count(), 4);

        let status = svc
            .get_report(Request::new(DateRangeRequest {
                from: "15/01/2024".to_string(),
                to: String::new(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_damage_regions_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);

        let front = svc
            .list_damage_regions(Request::new(ListDamageRegionsRequest {
                view: "frontal".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(front.regions.len(), 10);
        assert!(front.regions.iter().all(|r| r.view == "front"));

        let all = svc
            .list_damage_regions(Request::new(ListDamageRegionsRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(all.regions.len(), 39);

        let names = svc
            .describe_damages(Request::new(DescribeDamagesRequest {
                region_ids: vec!["capo".to_string(), "xyz".to_string()],
            }))
            .await
            .unwrap()
            .into_inner()
            .names;
        assert_eq!(names[1], "xyz");
        assert_ne!(names[0], "capo");
    }
}
