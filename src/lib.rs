//! 헌혈자 찾기 웹 애플리케이션
//!
//! 헌혈자가 연락처와 혈액형을 등록하고, 혈액이 필요한 사람이 혈액형과 지역으로
//! 헌혈자를 검색한 뒤 이메일로 연락을 요청할 수 있는 서버 렌더링 웹 서비스입니다.
//!
//! # Features
//!
//! - **헌혈자 등록**: 이름, 이메일, 전화번호, 혈액형, 지역 저장
//! - **헌혈자 검색**: 혈액형 완전 일치 + 지역 부분 일치
//! - **연락 요청**: 헌혈자에게 요청자 정보를 담은 메일 발송
//! - **MySQL**: 단일 연결로 헌혈자 데이터 영구 저장
//! - **SMTP**: 자격 증명이 없으면 Ethereal 테스트 계정으로 대체
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/폼 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 추출, 리다이렉트, HTML 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 등록/검색/연락 요청, 메일 작성
//! └─────────────────┘
//!          │                    │
//!          ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────┐
//! │  Repositories   │  │  MailTransport  │
//! └─────────────────┘  └─────────────────┘
//!          │                    │
//!          ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────┐
//! │      MySQL      │  │ SMTP / Ethereal │
//! └─────────────────┘  └─────────────────┘
//! ```
//!
//! 모든 서비스는 `main`에서 한 번 만들어져 `web::Data`로 주입됩니다.

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod test_support;
