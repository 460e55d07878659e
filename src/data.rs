//! Built-in scoping matrix: five scopes and five disciplines.

use crate::types::{Discipline, Scope};

struct ScopeRow {
    id: i64,
    name: &'static str,
    description: &'static str,
    example: &'static str,
}

struct DisciplineRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    considerations: [&'static str; 5],
}

const SCOPES: [ScopeRow; 5] = [
    ScopeRow {
        id: 1,
        name: "Consumer App",
        description: "Your business consumes a public third-party generative AI service, either at no-cost or paid. You don't own or see the training data or the model.",
        example: "An employee interacts with a generative AI chat application to generate ideas for an upcoming marketing campaign.",
    },
    ScopeRow {
        id: 2,
        name: "Enterprise App",
        description: "Your business uses a third-party enterprise application that has generative AI features embedded within, with a business relationship established.",
        example: "You use a third-party enterprise scheduling application that has a generative AI capability to help draft meeting agendas.",
    },
    ScopeRow {
        id: 3,
        name: "Pre-trained Models",
        description: "Your business builds its own application using an existing third-party generative AI foundation model through an API.",
        example: "You build a customer support chatbot that uses the Anthropic Claude foundation model through Amazon Bedrock APIs.",
    },
    ScopeRow {
        id: 4,
        name: "Fine-tuned Models",
        description: "Your business refines an existing foundation model by fine-tuning it with data specific to your business.",
        example: "You build an application for marketing teams that creates materials specific to your products using a fine-tuned model.",
    },
    ScopeRow {
        id: 5,
        name: "Self-trained Models",
        description: "Your business builds and trains a generative AI model from scratch using data that you own or acquire.",
        example: "You create a model trained exclusively on deep, industry-specific data to license to companies in that industry.",
    },
];

// considerations[i] applies to scope id i + 1
const DISCIPLINES: [DisciplineRow; 5] = [
    DisciplineRow {
        id: "governance",
        name: "Governance & Compliance",
        description: "The policies, procedures, and reporting needed to empower the business while minimizing risk.",
        considerations: [
            "Review terms of service and licensing agreements. Create policies prohibiting use of PII or confidential data. Implement user training on appropriate AI usage.",
            "Review enterprise agreements and data handling practices. Understand service provider's compliance posture. Monitor for changes in licensing terms.",
            "Establish data governance for prompt inputs and outputs. Implement logging for model inputs/outputs. Define acceptable use policies for your application.",
            "Classify the model according to the data used for fine-tuning. Implement strong data governance for training data. Document data lineage and model versioning.",
            "Comprehensive model governance program required. Data lineage tracking for all training data. Model versioning and rigorous testing throughout the lifecycle.",
        ],
    },
    DisciplineRow {
        id: "legal",
        name: "Legal & Privacy",
        description: "The specific regulatory, legal, and privacy requirements for using or creating generative AI solutions.",
        considerations: [
            "Understand provider's terms of service. Consider potential exposure of sensitive data in prompts. Treat all input and output as public information.",
            "Review enterprise agreements and data processing terms. Understand if your data is used to train models and how to opt out. Consider data residency requirements.",
            "Review both service provider and model provider legal terms. Consider indemnification policies for copyright content. Implement feedback mechanisms that protect sensitive data.",
            "Address GDPR 'right to erasure' challenges - deleting data requires model retraining. Consider copyright and IP implications of fine-tuning data.",
            "Develop your own terms of service for model usage. Address IP ownership questions for training data and outputs. Prepare for regulatory classification of your AI system.",
        ],
    },
    DisciplineRow {
        id: "risk",
        name: "Risk Management",
        description: "Identification of potential threats to generative AI solutions and recommended mitigations.",
        considerations: [
            "Assess third-party provider risks. Train users on generative AI threats. Monitor for sensitive data disclosure through prompts or outputs.",
            "Evaluate vendor security practices and SLAs. Protect API keys from unauthorized use. Assess risks around data reuse by providers.",
            "Implement threat modeling for your application. Protect against prompt injection attacks. Monitor for model abuse. Apply security mitigations from frameworks like MITRE ATLAS.",
            "Manage risks of data leakage from fine-tuned models. Consider model poisoning threats during fine-tuning. Careful selection of fine-tuning data.",
            "Complete threat modeling required. Data poisoning risks during training. Model security during development lifecycle. Implement content filtering and monitoring.",
        ],
    },
    DisciplineRow {
        id: "controls",
        name: "Controls",
        description: "The implementation of security controls that are used to mitigate risk.",
        considerations: [
            "Implement network-based controls (web proxies, firewalls, DLP). Deploy host-based controls (endpoint detection). Provide security awareness training.",
            "Configure identity integration with enterprise app. Review vendor security controls. Implement DLP to prevent upload of highly sensitive data.",
            "Implement IAM policies to restrict access to model endpoints. Build application layer authorization. Apply input validation, output filtering, and guardrails.",
            "Secure the fine-tuning pipeline. Control access to training data. Encrypt model artifacts. Implement input/output sanitization.",
            "Comprehensive model security controls. Secure MLOps pipeline. Content filtering during training and inference. Vulnerability scanning and testing.",
        ],
    },
    DisciplineRow {
        id: "resilience",
        name: "Resilience",
        description: "How to architect generative AI solutions to maintain availability and meet business SLAs.",
        considerations: [
            "Assess provider's availability SLAs. Have backup plans for service outages. Consider usage quotas and billing impacts.",
            "Understand vendor's availability and resilience posture. Establish contingency processes. Monitor API usage and costs.",
            "Configure appropriate timeouts for complex prompts. Implement retry logic and circuit breaker patterns. Consider multi-region deployments for critical workloads.",
            "High availability for inference endpoints. Backup access to training data. Rollback mechanisms for model updates.",
            "Resilient training infrastructure. Model checkpointing during training. Disaster recovery for model artifacts and training data.",
        ],
    },
];

/// Scopes in declaration order
pub fn builtin_scopes() -> Vec<Scope> {
    SCOPES
        .iter()
        .map(|row| Scope {
            id: row.id,
            name: row.name.to_string(),
            description: row.description.to_string(),
            example: row.example.to_string(),
        })
        .collect()
}

/// Disciplines in declaration order
pub fn builtin_disciplines() -> Vec<Discipline> {
    DISCIPLINES
        .iter()
        .map(|row| Discipline {
            id: row.id.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            considerations: row
                .considerations
                .iter()
                .enumerate()
                .map(|(i, text)| ((i + 1).to_string(), text.to_string()))
                .collect(),
        })
        .collect()
}
