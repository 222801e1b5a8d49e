//! foreman-core
//!
//! 作業指示（work order）トラッカーのコア。単一 JSON ファイルを正本とする
//! レコードストアと、その上の検証・サービス層を提供します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（work_order, ids, draft, rules, errors）
//! - **ports**: 抽象化レイヤー（RecordStore, Clock, IdGenerator）
//! - **impls**: 実装（JsonFileStore が本番、InMemoryStore が開発・テスト用）
//! - **app**: アプリケーションロジック（WorkOrderService, WorkOrderCounts）
//!
//! # 契約の要点
//! - boundary に見せる操作は list / get / create / update / remove の 5 つ
//! - 検証エラーはストアに触る前に確定する
//! - NotFound はエラーではなく不在値（`None` / `false`）
//! - バッキングファイルが無い・壊れている場合は空配列として自己修復する

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
