use crate::core::client::ApiClient;
use crate::core::render::{render_list, render_record, OutputFormat, Tabular};
use crate::core::{ConfigProvider, Resource, Result};

/// 一個資源上的單一 CRUD 動作
#[derive(Debug, Clone, PartialEq)]
pub enum CrudRequest<I> {
    List(Vec<(&'static str, String)>),
    Get(i64),
    Add(I),
    Update(i64, I),
    Delete(i64),
}

impl<I> CrudRequest<I> {
    /// 有值才帶查詢參數
    pub fn list_by(key: &'static str, value: Option<i64>) -> Self {
        CrudRequest::List(
            value
                .map(|v| vec![(key, v.to_string())])
                .unwrap_or_default(),
        )
    }
}

pub async fn run_crud<R, C>(
    client: &ApiClient<C>,
    request: CrudRequest<R::Input>,
    format: OutputFormat,
) -> Result<String>
where
    R: Resource + Tabular,
    C: ConfigProvider,
{
    let label = R::KIND.label();

    match request {
        CrudRequest::List(query) => {
            let items = client.list_filtered::<R>(&query).await?;
            render_list(&items, format, R::KIND.plural())
        }
        CrudRequest::Get(id) => {
            let item = client.get::<R>(id).await?;
            render_record(&item, format)
        }
        CrudRequest::Add(input) => {
            let created = client.create::<R>(&input).await?;
            with_notice(
                format,
                format!("✅ {} {} added", label, created.id()),
                render_record(&created, format)?,
            )
        }
        CrudRequest::Update(id, input) => {
            let updated = client.update::<R>(id, &input).await?;
            with_notice(
                format,
                format!("✅ {} {} updated", label, id),
                render_record(&updated, format)?,
            )
        }
        CrudRequest::Delete(id) => {
            client.delete::<R>(id).await?;
            Ok(format!("🗑️ {} {} deleted", label, id))
        }
    }
}

/// JSON / CSV 輸出保持可被程式讀取，只在表格模式加上提示
fn with_notice(format: OutputFormat, notice: String, body: String) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => format!("{}\n{}", notice, body),
        OutputFormat::Json | OutputFormat::Csv => body,
    })
}
