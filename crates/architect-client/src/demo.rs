// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline demo backend.
//!
//! Returns a canned login-card component after a short simulated latency so
//! the client can be explored without a running generation service.

use std::time::Duration;

use architect_core::{
    ArchitectError, AttemptRecord, GenerationRequest, GenerationResult, GenerationService,
    ValidationReport,
};
use async_trait::async_trait;
use tracing::debug;

const DEMO_TEMPLATE: &str = r#"<div class="flex items-center justify-center min-h-screen" style="background: #0f172a;">
  <div class="relative p-8 rounded-2xl" style="background: rgba(255,255,255,0.05); backdrop-filter: blur(20px); border: 1px solid rgba(255,255,255,0.1); width: 380px;">
    <h2 class="text-2xl font-bold text-center mb-2" style="color: #ffffff; font-family: 'Inter', sans-serif;">
      Welcome Back
    </h2>
    <p class="text-center mb-8" style="color: #94a3b8; font-size: 0.875rem;">Sign in to your account</p>

    <div class="mb-5">
      <label style="color: #cbd5e1; font-size: 0.875rem; font-weight: 500;">Email</label>
      <input type="email" placeholder="you@example.com" [(ngModel)]="email"
        style="width:100%; padding:10px 14px; border-radius:8px; color:#ffffff;" />
    </div>

    <div class="mb-6">
      <label style="color: #cbd5e1; font-size: 0.875rem; font-weight: 500;">Password</label>
      <input type="password" placeholder="••••••••" [(ngModel)]="password"
        style="width:100%; padding:10px 14px; border-radius:8px; color:#ffffff;" />
    </div>

    <button (click)="onLogin()"
      style="width:100%; padding:12px; background:#6366f1; color:#ffffff; border:none; border-radius:8px; font-weight:600; transition:200ms ease;">
      Sign In
    </button>

    <p class="text-center mt-6" style="color:#64748b; font-size:0.875rem;">
      No account? <a style="color:#6366f1; cursor:pointer;">Create one</a>
    </p>
  </div>
</div>"#;

const DEMO_COMPONENT: &str = r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-login-card',
  templateUrl: './login-card.component.html',
  styleUrls: ['./login-card.component.scss']
})
export class LoginCardComponent {
  email: string = '';
  password: string = '';

  // Wire to the auth service once it exists.
  onLogin(): void {
    console.log('Login attempted', { email: this.email });
  }
}"#;

/// Canned [`GenerationService`] used in demo mode.
pub struct DemoService {
    latency: Duration,
}

impl DemoService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The result every demo generation returns.
    pub fn canned_result() -> GenerationResult {
        GenerationResult {
            template: DEMO_TEMPLATE.to_string(),
            component_source: DEMO_COMPONENT.to_string(),
            success: true,
            iteration_count: 1,
            validation: ValidationReport {
                is_valid: true,
                errors: Vec::new(),
                warnings: vec![
                    "Design system fonts not explicitly referenced (applied via global styles)"
                        .to_string(),
                ],
                passed_checks: vec![
                    "Curly braces balanced".to_string(),
                    "Component class exported".to_string(),
                    "All colors comply with design system".to_string(),
                ],
            },
            audit_trail: vec![AttemptRecord {
                attempt_number: 1,
                validation: ValidationReport::passing(Vec::new()),
            }],
        }
    }
}

#[async_trait]
impl GenerationService for DemoService {
    fn name(&self) -> &str {
        "demo"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ArchitectError> {
        debug!(
            session_id = %request.session_id,
            latency_ms = self.latency.as_millis() as u64,
            "demo generation"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::canned_result())
    }
}
