use crate::dns::{RecordBuilder, RecordTypeMapper};
use hickory_proto::op::{Header, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use reverse_dns_application::use_cases::HandleDnsQueryUseCase;
use reverse_dns_domain::DnsQuery;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Resolves one question into wire records, dropping any that fail to convert.
    pub async fn answer(&self, query: &DnsQuery) -> Vec<Record> {
        self.use_case
            .execute(query)
            .await
            .iter()
            .filter_map(|record| match RecordBuilder::build(record) {
                Ok(wire) => Some(wire),
                Err(e) => {
                    error!(error = %e, domain = %record.domain, "Failed to encode record");
                    None
                }
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_header = request.header();

        if request_header.message_type() != MessageType::Query
            || request_header.op_code() != OpCode::Query
        {
            warn!(op_code = ?request_header.op_code(), "Unsupported operation");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let query = request.query();
        let record_type = RecordTypeMapper::from_hickory(query.query_type());
        let dns_query = DnsQuery::new(&query.name().to_string(), record_type);

        info!(
            domain = %dns_query.domain,
            record_type = %record_type,
            client = %request.src().ip(),
            "Request received"
        );

        let answers = self.answer(&dns_query).await;

        debug!(domain = %dns_query.domain, answers = answers.len(), "Sending response");

        let mut header = Header::response_from_request(request_header);
        header.set_authoritative(true);
        header.set_recursion_available(false);
        header.set_response_code(ResponseCode::NoError);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(
            header,
            answers.iter(),
            std::iter::empty(),
            std::iter::empty(),
            std::iter::empty(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}
