use url::form_urlencoded;

use crate::client::Http;
use crate::error::Error;
use crate::types::{TransferDetailResponse, TransferSearchResponse};

use super::{path_segment, require_text};

const TRANSFERS_PATH: &str = "/transfers";

/// Settlement transfer lookups.
#[derive(Debug, Clone, Copy)]
pub struct TransferService<'a> {
    http: &'a Http,
}

impl<'a> TransferService<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Fetch one page of a merchant's transfers.
    pub fn search(&self, merchant_id: &str, page_number: u32) -> Result<TransferSearchResponse, Error> {
        let id = require_text(merchant_id, "Merchant id")?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("merchantId", id)
            .append_pair("pageNumber", &page_number.to_string())
            .finish();
        self.http.get(&format!("{TRANSFERS_PATH}?{query}"))
    }

    pub fn get(&self, transfer_id: &str) -> Result<TransferDetailResponse, Error> {
        let id = path_segment(transfer_id, "Transfer id")?;
        self.http.get(&format!("{TRANSFERS_PATH}/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::Recorder;

    #[test]
    fn search_builds_standard_query() {
        let recorder = Recorder::default();
        recorder.reply(
            200,
            r#"{"transfers":[{"transferId":"tr-1","amount":100}],"pageNumber":1,"totalPages":3}"#,
        );
        let http = recorder.http();

        let page = TransferService::new(&http).search("m-1", 1).unwrap();
        assert_eq!(page.transfers.len(), 1);
        assert_eq!(page.transfers[0].transfer_id, "tr-1");
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(
            recorder.last().url,
            "http://gateway.test/transfers?merchantId=m-1&pageNumber=1"
        );
    }

    #[test]
    fn search_encodes_merchant_id() {
        let recorder = Recorder::default();
        recorder.reply(200, "{}");
        let http = recorder.http();
        TransferService::new(&http).search("a&b c", 2).unwrap();
        assert_eq!(
            recorder.last().url,
            "http://gateway.test/transfers?merchantId=a%26b+c&pageNumber=2"
        );
    }

    #[test]
    fn get_reads_detail() {
        let recorder = Recorder::default();
        recorder.reply(
            200,
            r#"{"transferId":"tr-9","transactions":[{"orderCode":"o-1","amount":10}]}"#,
        );
        let http = recorder.http();
        let detail = TransferService::new(&http).get("tr-9").unwrap();
        assert_eq!(detail.transactions[0].order_code, "o-1");
        assert_eq!(recorder.last().url, "http://gateway.test/transfers/tr-9");
    }

    #[test]
    fn get_keeps_query_characters_inside_the_path() {
        let recorder = Recorder::default();
        recorder.reply(200, r#"{"transferId":"tr?page=2","transactions":[]}"#);
        let http = recorder.http();
        TransferService::new(&http).get("tr?page=2").unwrap();
        assert_eq!(recorder.last().url, "http://gateway.test/transfers/tr%3Fpage%3D2");
    }
}
