use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::proto::evaluations::photo_service_server::PhotoService;
use crate::proto::evaluations::{
    DeletePhotoRequest, DeletePhotoResponse, UploadPhotosRequest, UploadPhotosResponse,
};
use crate::storage::{upload_batch, ImageFile, ImageStore, MAX_IMAGES_PER_RECORD};

pub struct PhotoServiceImpl {
    images: Arc<dyn ImageStore>,
}

impl PhotoServiceImpl {
    pub fn new(images: Arc<dyn ImageStore>) -> Self {
        Self { images }
    }
}

#[tonic::async_trait]
impl PhotoService for PhotoServiceImpl {
    async fn upload_photos(
        &self,
        request: Request<UploadPhotosRequest>,
    ) -> Result<Response<UploadPhotosResponse>, Status> {
        let req = request.into_inner();
        let files: Vec<ImageFile> = req
            .files
            .into_iter()
            .map(|f| ImageFile::new(f.file_name, f.content_type, f.data))
            .collect();
        let existing = usize::try_from(req.existing_count).unwrap_or(0);

        let result = upload_batch(
            self.images.as_ref(),
            &files,
            &req.folder,
            existing,
            MAX_IMAGES_PER_RECORD,
        )
        .await;

        Ok(Response::new(UploadPhotosResponse {
            urls: result.urls,
            skipped: result.skipped as i32,
        }))
    }

    async fn delete_photo(
        &self,
        request: Request<DeletePhotoRequest>,
    ) -> Result<Response<DeletePhotoResponse>, Status> {
        let req = request.into_inner();
        if req.path.trim().is_empty() {
            return Err(Status::invalid_argument("path is required"));
        }
        let success = self.images.delete(&req.path).await;
        Ok(Response::new(DeletePhotoResponse { success }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::evaluations::PhotoFile;
    use crate::storage::LocalImageStore;

    fn photo(name: &str, content_type: &str) -> PhotoFile {
        PhotoFile {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            data: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn test_upload_skips_invalid_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let svc = PhotoServiceImpl::new(Arc::new(LocalImageStore::new(dir.path())));

        let res = svc
            .upload_photos(Request::new(UploadPhotosRequest {
                files: vec![photo("a.jpg", "image/jpeg"), photo("b.txt", "text/plain")],
                folder: String::new(),
                existing_count: 0,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(res.urls.len(), 1);
        assert_eq!(res.skipped, 1);

        let stored = std::fs::read_dir(dir.path().join("avaliacoes"))
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        let path = format!("avaliacoes/{}", stored.file_name().to_string_lossy());
        let deleted = svc
            .delete_photo(Request::new(DeletePhotoRequest { path }))
            .await
            .unwrap()
            .into_inner();
        assert!(deleted.success);
    }

    #[tokio::test]
    async fn test_delete_requires_path() {
        let dir = tempfile::tempdir().unwrap();
        let svc = PhotoServiceImpl::new(Arc::new(LocalImageStore::new(dir.path())));
        let status = svc
            .delete_photo(Request::new(DeletePhotoRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
