//! The HTTP client: one method per service endpoint.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use waybill_types::{
    AddressBookEntry, AddressDraft, ApiEnvelope, DashboardData, LoginResponse, ParcelDraft,
    ParcelPage, ParcelRequest, PasswordDraft, ProfileData, RemoteParcel, UpdateProfileRequest,
    UploadPhotoResponse, UserProfile,
};

use crate::endpoints;
use crate::error::ApiError;
use crate::session::AuthToken;

const CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Free-text and date-range filters for the parcel list.
///
/// Dates are `YYYY-MM-DD`. Empty filters are omitted from the query string
/// entirely rather than sent as empty parameters.
#[derive(Debug, Clone, Default)]
pub struct ParcelFilter {
    pub query: String,
    pub from_date: String,
    pub to_date: String,
}

impl ParcelFilter {
    fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push(("q", self.query.as_str()));
        }
        if !self.from_date.is_empty() {
            params.push(("from_date", self.from_date.as_str()));
        }
        if !self.to_date.is_empty() {
            params.push(("to_date", self.to_date.as_str()));
        }
        params
    }
}

fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
}

/// Authenticated client for the shipping service.
///
/// Holds the bearer token for its whole lifetime; constructed through
/// [`ApiClient::login`] (or [`ApiClient::with_token`] for a pre-issued
/// token) and shared across request tasks behind an `Arc`.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: AuthToken,
}

impl ApiClient {
    /// Authenticate and return the client plus the profile the service
    /// attached to the login response.
    pub async fn login(
        base_url: &str,
        email: &str,
        password: &str,
    ) -> Result<(Self, UserProfile), ApiError> {
        let http = build_http_client()?;
        let url = join(base_url, endpoints::LOGIN);
        let response = http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http { status });
        }
        let body: LoginResponse = response.json().await?;
        if body.status != 200 {
            return Err(ApiError::Rejected {
                status: body.status,
            });
        }
        let token = body.access_token.ok_or(ApiError::MissingData)?;
        let profile = body.user_data.unwrap_or_default();

        tracing::info!(email, "logged in");
        Ok((
            Self {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                token: AuthToken::new(token),
            },
            profile,
        ))
    }

    /// Build a client around a pre-issued token.
    pub fn with_token(base_url: &str, token: AuthToken) -> Result<Self, ApiError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    // ------------------------------------------------------------------
    // Dashboard and parcels
    // ------------------------------------------------------------------

    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get_data(endpoints::DASHBOARD, &[]).await
    }

    pub async fn list_parcels(&self, filter: &ParcelFilter) -> Result<ParcelPage, ApiError> {
        self.get_data(endpoints::PARCELS, &filter.params()).await
    }

    pub async fn get_parcel(&self, id: u64) -> Result<RemoteParcel, ApiError> {
        self.get_data(&endpoints::parcel(id), &[]).await
    }

    /// Create a parcel. The draft's item sequence travels as
    /// `parcel_items`; sender and receiver pass through unchanged.
    pub async fn create_parcel(&self, draft: &ParcelDraft) -> Result<(), ApiError> {
        let request = ParcelRequest {
            sender: &draft.sender,
            receiver: &draft.receiver,
            parcel_items: &draft.items,
        };
        self.post_json(endpoints::PARCEL_CREATE, &request).await
    }

    /// Update an existing parcel in place. Same body shape as create; the
    /// client performs no deduplication, so resubmitting an unmodified
    /// draft issues an identical second request.
    pub async fn update_parcel(&self, id: u64, draft: &ParcelDraft) -> Result<(), ApiError> {
        let request = ParcelRequest {
            sender: &draft.sender,
            receiver: &draft.receiver,
            parcel_items: &draft.items,
        };
        self.post_json(&endpoints::parcel_update(id), &request).await
    }

    // ------------------------------------------------------------------
    // Address book
    // ------------------------------------------------------------------

    pub async fn list_address_book(
        &self,
        query: &str,
    ) -> Result<Vec<AddressBookEntry>, ApiError> {
        let params: &[(&str, &str)] = if query.is_empty() {
            &[]
        } else {
            &[("q", query)]
        };
        self.get_data(endpoints::ADDRESS_BOOK, params).await
    }

    pub async fn create_address(&self, draft: &AddressDraft) -> Result<(), ApiError> {
        self.post_json(endpoints::ADDRESS_BOOK, draft).await
    }

    pub async fn update_address(&self, id: u64, draft: &AddressDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url(&endpoints::address_book_entry(id)))
            .bearer_auth(self.token.expose())
            .json(draft)
            .send()
            .await?;
        Self::check_envelope(response).await
    }

    pub async fn delete_address(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&endpoints::address_book_entry(id)))
            .bearer_auth(self.token.expose())
            .send()
            .await?;
        Self::check_envelope(response).await
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    pub async fn profile(&self) -> Result<ProfileData, ApiError> {
        self.get_data(endpoints::PROFILE, &[]).await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        self.post_json(endpoints::PROFILE_UPDATE, request).await
    }

    pub async fn change_password(&self, draft: &PasswordDraft) -> Result<(), ApiError> {
        self.post_json(endpoints::CHANGE_PASSWORD, draft).await
    }

    /// Upload a profile photo as `multipart/form-data`.
    ///
    /// Returns the new photo URL when the service provides one.
    pub async fn upload_profile_photo(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("image/jpeg")?;
        let form = reqwest::multipart::Form::new().part("profile_photo", part);

        let response = self
            .http
            .post(self.url(endpoints::UPLOAD_PROFILE_PHOTO))
            .bearer_auth(self.token.expose())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http { status });
        }
        let body: UploadPhotoResponse = response.json().await?;
        if body.status != 200 {
            return Err(ApiError::Rejected {
                status: body.status,
            });
        }
        Ok(body.profile_photo_url)
    }

    // ------------------------------------------------------------------
    // Shared plumbing
    // ------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    /// GET an enveloped resource and unwrap its `data` payload.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self
            .http
            .get(self.url(path))
            .bearer_auth(self.token.expose());
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;
        let envelope: ApiEnvelope<T> = Self::read_envelope(response).await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// POST a JSON body where only the envelope status matters.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.token.expose())
            .json(body)
            .send()
            .await?;
        Self::check_envelope(response).await
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "request failed at the HTTP layer");
            return Err(ApiError::Http { status });
        }
        let envelope: ApiEnvelope<T> = response.json().await?;
        if !envelope.is_success() {
            tracing::warn!(status = envelope.status, "service rejected the request");
            return Err(ApiError::Rejected {
                status: envelope.status,
            });
        }
        Ok(envelope)
    }

    async fn check_envelope(response: reqwest::Response) -> Result<(), ApiError> {
        Self::read_envelope::<serde_json::Value>(response)
            .await
            .map(|_| ())
    }
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod integration_tests {
    use super::{ApiClient, ParcelFilter};
    use crate::error::ApiError;
    use crate::session::AuthToken;
    use waybill_types::{ItemField, ParcelDraft};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_token(&server.uri(), AuthToken::new("test-token")).unwrap()
    }

    fn envelope(data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({ "status": 200, "data": data })
    }

    #[tokio::test]
    async fn attaches_bearer_token_to_every_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/dashboard-data"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
                "total_shipments": 3,
                "pending_shipments": 1,
                "delivered_shipments": 2,
                "recent_shipments": []
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let data = client_for(&server).dashboard().await.unwrap();
        assert_eq!(data.total_shipments, 3);
        assert_eq!(data.pending_shipments, 1);
    }

    #[tokio::test]
    async fn create_parcel_sends_items_as_parcel_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/parcel/create"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "parcel_items": [
                    { "reference": "first" },
                    { "reference": "second" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({}))))
            .expect(1)
            .mount(&server)
            .await;

        let mut draft = ParcelDraft::default();
        draft.items[0].set(ItemField::Reference, "first");
        draft.push_item();
        draft.items[1].set(ItemField::Reference, "second");

        client_for(&server).create_parcel(&draft).await.unwrap();
    }

    #[tokio::test]
    async fn list_parcels_omits_empty_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/parcel"))
            .respond_with(move |request: &wiremock::Request| {
                assert!(
                    request.url.query().is_none(),
                    "empty filter should send no query string"
                );
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "status": 200, "data": { "records": [] } }))
            })
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server)
            .list_parcels(&ParcelFilter::default())
            .await
            .unwrap();
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn list_parcels_sends_query_and_date_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/parcel"))
            .and(query_param("q", "acme"))
            .and(query_param("from_date", "2025-01-01"))
            .and(query_param("to_date", "2025-01-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
                "records": [{ "id": 5, "air_way_bill": "AWB-5", "parcel_status": "Delivered" }]
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let filter = ParcelFilter {
            query: "acme".into(),
            from_date: "2025-01-01".into(),
            to_date: "2025-01-31".into(),
        };
        let page = client_for(&server).list_parcels(&filter).await.unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].air_way_bill.as_deref(), Some("AWB-5"));
    }

    #[tokio::test]
    async fn rejected_envelope_is_not_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/dashboard-data"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "status": 422, "data": null })),
            )
            .mount(&server)
            .await;

        let error = client_for(&server).dashboard().await.unwrap_err();
        match error {
            ApiError::Rejected { status } => assert_eq!(status, 422),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_is_distinguished_from_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/dashboard-data"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let error = client_for(&server).dashboard().await.unwrap_err();
        match error {
            ApiError::Http { status } => assert_eq!(status.as_u16(), 500),
            other => panic!("expected Http, got {other:?}"),
        }
        assert!(error.is_rejection());
    }

    #[tokio::test]
    async fn delete_address_targets_entry_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/customer/address-book/42"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({}))))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_address(42).await.unwrap();
    }

    #[tokio::test]
    async fn resubmitting_an_update_issues_identical_requests() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/parcel/update/7"))
            .and(body_partial_json(serde_json::json!({
                "sender": { "company_name": "Acme" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({}))))
            .expect(2)
            .mount(&server)
            .await;

        let mut draft = ParcelDraft::default();
        draft.sender.company_name = "Acme".into();
        let client = client_for(&server);
        client.update_parcel(7, &draft).await.unwrap();
        client.update_parcel(7, &draft).await.unwrap();
    }

    #[tokio::test]
    async fn get_parcel_returns_remote_sections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customer/parcel/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
                "sender": { "id": 1, "company_name": "Acme" },
                "receiver": { "id": 2 },
                "parcel_items": [{ "id": 3, "weight": 4.5 }]
            }))))
            .mount(&server)
            .await;

        let parcel = client_for(&server).get_parcel(11).await.unwrap();
        assert_eq!(
            parcel.sender.unwrap().company_name.as_deref(),
            Some("Acme")
        );
        let items = parcel.parcel_items.unwrap();
        assert_eq!(items[0].weight.as_deref(), Some("4.5"));
    }

    #[tokio::test]
    async fn login_builds_a_client_from_the_issued_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/login"))
            .and(body_partial_json(serde_json::json!({
                "email": "a@a.com",
                "password": "pw"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": 200,
                "accessToken": "issued-token",
                "userData": { "name": "Jo", "email": "a@a.com" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/customer/profile"))
            .and(header("Authorization", "Bearer issued-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
                "name": "Jo Lovelace"
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let (client, profile) = ApiClient::login(&server.uri(), "a@a.com", "pw")
            .await
            .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jo"));

        let data = client.profile().await.unwrap();
        assert_eq!(data.name.as_deref(), Some("Jo Lovelace"));
    }

    #[tokio::test]
    async fn login_rejection_carries_the_business_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": 401 })),
            )
            .mount(&server)
            .await;

        let error = ApiClient::login(&server.uri(), "a@a.com", "bad")
            .await
            .unwrap_err();
        match error {
            ApiError::Rejected { status } => assert_eq!(status, 401),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
